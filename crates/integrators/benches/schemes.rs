//! Per-trajectory cost of each scheme on the damped oscillator.
//!
//! Every scheme integrates the same problem over the same grid, so the
//! timings compare the per-step work directly: closed-form updates, the
//! number of stages of a splitting table, and the per-step root solve of
//! the implicit schemes.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use contiv_core::{Integrator, State, TimeSpan};
use contiv_integrators::{
    CoefficientTable, Composition, Contact, Euler, ImplicitLeapfrog, Leapfrog, MidpointContact,
    Mode, Variational,
    del::{self, lagrangians},
};

const DAMPING: f64 = 0.1;
const H: f64 = 0.01;

fn span() -> TimeSpan {
    TimeSpan::new(0.0, 100.0)
}

fn damped(x: f64, p: f64, _t: f64) -> f64 {
    -x - DAMPING * p
}

fn bench_scheme<I: Integrator>(c: &mut Criterion, group: &str, name: &str, scheme: &I) {
    let mut group = c.benchmark_group(group);
    group.bench_with_input(BenchmarkId::from_parameter(name), scheme, |b, scheme| {
        b.iter(|| scheme.integrate(black_box(State::new(0.0, 1.0)), span(), black_box(H)));
    });
    group.finish();
}

fn closed_form(c: &mut Criterion) {
    bench_scheme(c, "closed_form", "euler", &Euler { acceleration: damped });
    bench_scheme(c, "closed_form", "leapfrog", &Leapfrog { acceleration: damped });
    bench_scheme(c, "closed_form", "contact", &Contact::first_order(DAMPING));
    bench_scheme(c, "closed_form", "midpoint", &MidpointContact::new(DAMPING));
    bench_scheme(c, "closed_form", "symcontact", &Contact::second_order(DAMPING));
    bench_scheme(c, "closed_form", "variational", &Variational::new(DAMPING));
}

fn composition(c: &mut Criterion) {
    let tables = [
        ("leapfrog", CoefficientTable::leapfrog()),
        ("pseudo_leapfrog", CoefficientTable::pseudo_leapfrog()),
        ("ruth3", CoefficientTable::ruth3()),
        ("ruth4", CoefficientTable::ruth4()),
    ];

    for (name, table) in tables {
        bench_scheme(c, "composition", name, &Composition::new(table, damped));
    }
}

fn implicit(c: &mut Criterion) {
    bench_scheme(c, "implicit", "leapfrog", &ImplicitLeapfrog::new(damped));

    let lagrangian = lagrangians::symmetric_contact(DAMPING);
    if let Ok(stepper) = del::del(&lagrangian, Mode::default()) {
        bench_scheme(c, "implicit", "del", &stepper);
    }
    if let Ok(stepper) = del::del(&lagrangian, Mode::Explicit) {
        bench_scheme(c, "explicit", "del", &stepper);
    }
}

criterion_group!(benches, closed_form, composition, implicit);
criterion_main!(benches);

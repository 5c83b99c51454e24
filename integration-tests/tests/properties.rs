use contiv_core::{Integrator, State, TimeSpan, steps};
use contiv_integrators::{
    CoefficientTable, Contact, ImplicitLeapfrog, MidpointContact, Mode, Variational,
    del::{self, lagrangians},
};
use contiv_oscillator::{Oscillator, damped, forced};

use approx::assert_relative_eq;
use integration_tests::windowed_peak_energy;

#[test]
fn grid_lengths() {
    assert_eq!(steps(TimeSpan::new(0.0, 10.0), 0.1), 100);
    assert_eq!(steps(TimeSpan::new(0.0, 10.0), 0.3), 33);

    let span = TimeSpan::new(0.0, 10.0);
    let initial = State::new(0.0, 1.0);
    assert_eq!(damped::ruth4(initial, span, 0.1, 0.3).len(), 33);
    assert_eq!(damped::midpoint(initial, span, 0.1, 0.3).len(), 33);
    assert_eq!(
        forced::leapfrog(initial, span, 0.1, 1.0, 2.0, 0.3)
            .expect("converges")
            .len(),
        33
    );
    assert_eq!(
        contiv_oscillator::rk4::rk4(initial, span, 0.1, 0.3)
            .expect("integrates")
            .len(),
        33
    );
}

#[test]
fn coefficient_tables_are_consistent() {
    let tables = [
        CoefficientTable::leapfrog(),
        CoefficientTable::pseudo_leapfrog(),
        CoefficientTable::ruth3(),
        CoefficientTable::ruth4(),
    ];

    for table in tables {
        let (sum_a, sum_b) = table.sums();
        assert_relative_eq!(sum_a, 1.0, epsilon = 1e-14);
        assert_relative_eq!(sum_b, 1.0, epsilon = 1e-14);
    }
}

#[test]
fn damped_energy_decays_window_by_window() {
    let (a, h) = (0.2, 0.1);
    let span = TimeSpan::new(0.0, 80.0);
    let initial = State::new(0.0, 1.0);
    // One window per period of the unit oscillator.
    let window = 63;

    let trajectories = [
        ("contact", damped::contact(initial, span, a, h)),
        ("symcontact", damped::symcontact(initial, span, a, h)),
        ("midpoint", damped::midpoint(initial, span, a, h)),
        ("variational", damped::variational_noncontact(initial, span, a, h)),
        ("leapfrog", damped::leapfrog(initial, span, a, h)),
        ("ruth3", damped::ruth3(initial, span, a, h)),
    ];

    for (name, trajectory) in trajectories {
        let peaks = windowed_peak_energy(&trajectory, window);
        assert!(peaks.len() >= 10, "{name}");
        for pair in peaks.windows(2) {
            assert!(pair[1] <= pair[0], "{name}: {peaks:?}");
        }

        let last = trajectory.last().expect("non-empty");
        assert!(last.energy() < 1e-5 * initial.energy(), "{name}: {last:?}");
    }
}

#[test]
fn repeated_runs_are_identical() {
    let span = TimeSpan::new(0.0, 30.0);
    let initial = State::new(0.1, 1.0);
    let h = 0.05;
    let oscillator = Oscillator::damped(0.25);
    let acc = move |x: f64, p: f64, t: f64| oscillator.acceleration(x, p, t);

    assert_eq!(
        Contact::second_order(0.25).integrate(initial, span, h),
        Contact::second_order(0.25).integrate(initial, span, h),
    );
    assert_eq!(
        MidpointContact::new(0.25).integrate(initial, span, h),
        MidpointContact::new(0.25).integrate(initial, span, h),
    );
    assert_eq!(
        Variational::new(0.25).integrate(initial, span, h),
        Variational::new(0.25).integrate(initial, span, h),
    );

    let implicit = ImplicitLeapfrog::new(acc);
    assert_eq!(
        implicit.integrate(initial, span, h).expect("converges"),
        implicit.integrate(initial, span, h).expect("converges"),
    );

    let generated = del::del(&lagrangians::symmetric_contact(0.25), Mode::default())
        .expect("evaluable");
    assert_eq!(
        generated.integrate(initial, span, h).expect("converges"),
        generated.integrate(initial, span, h).expect("converges"),
    );
}

#[test]
fn implicit_failure_aborts_the_whole_trajectory() {
    // A residual that never crosses zero near the seed.
    let acc = |_x: f64, p: f64, _t: f64| 1e6 * p * p + 1e6;
    let span = TimeSpan::new(0.0, 1.0);

    let result = ImplicitLeapfrog::new(acc).integrate(State::new(0.0, 0.0), span, 0.1);
    assert!(result.is_err());
}

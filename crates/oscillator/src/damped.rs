//! Every scheme applied to the unforced damped oscillator `ṗ = −x − a·p`.
//!
//! Each wrapper takes `(initial, span, a, h)` and fixes the acceleration or
//! restoring term for the scheme it calls.

use contiv_core::{LinearRestoring, NoForcing, State, TimeSpan, Trajectory};
use contiv_integrators::{composition, contact, euler, leapfrog, variational};

fn acceleration(a: f64) -> impl Fn(f64, f64, f64) -> f64 + Copy {
    move |x, p, _t| -x - a * p
}

#[must_use]
pub fn euler(initial: State, span: TimeSpan, a: f64, h: f64) -> Trajectory {
    euler::euler(initial, span, h, acceleration(a))
}

/// Explicit kick-drift-kick leapfrog.
#[must_use]
pub fn leapfrog(initial: State, span: TimeSpan, a: f64, h: f64) -> Trajectory {
    leapfrog::leapfrog(initial, span, h, acceleration(a))
}

/// Drift-kick-drift leapfrog through the composition engine.
#[must_use]
pub fn leapfrog2(initial: State, span: TimeSpan, a: f64, h: f64) -> Trajectory {
    composition::composed_leapfrog(initial, span, h, acceleration(a))
}

#[must_use]
pub fn pseudoleapfrog(initial: State, span: TimeSpan, a: f64, h: f64) -> Trajectory {
    composition::pseudo_leapfrog(initial, span, h, acceleration(a))
}

#[must_use]
pub fn ruth3(initial: State, span: TimeSpan, a: f64, h: f64) -> Trajectory {
    composition::ruth3(initial, span, h, acceleration(a))
}

#[must_use]
pub fn ruth4(initial: State, span: TimeSpan, a: f64, h: f64) -> Trajectory {
    composition::ruth4(initial, span, h, acceleration(a))
}

#[must_use]
pub fn contact(initial: State, span: TimeSpan, a: f64, h: f64) -> Trajectory {
    contact::contact(initial, span, h, a, LinearRestoring, NoForcing)
}

#[must_use]
pub fn midpoint(initial: State, span: TimeSpan, a: f64, h: f64) -> Trajectory {
    contact::midpoint(initial, span, h, a, NoForcing)
}

#[must_use]
pub fn symcontact(initial: State, span: TimeSpan, a: f64, h: f64) -> Trajectory {
    contact::symcontact(initial, span, h, a, LinearRestoring, NoForcing)
}

#[must_use]
pub fn variational_noncontact(initial: State, span: TimeSpan, a: f64, h: f64) -> Trajectory {
    variational::variational_noncontact(initial, span, h, a, LinearRestoring, NoForcing)
}

#[cfg(test)]
mod tests {
    use super::*;

    type Scheme = fn(State, TimeSpan, f64, f64) -> Trajectory;

    const SCHEMES: [(&str, Scheme); 10] = [
        ("euler", euler),
        ("leapfrog", leapfrog),
        ("leapfrog2", leapfrog2),
        ("pseudoleapfrog", pseudoleapfrog),
        ("ruth3", ruth3),
        ("ruth4", ruth4),
        ("contact", contact),
        ("midpoint", midpoint),
        ("symcontact", symcontact),
        ("variational_noncontact", variational_noncontact),
    ];

    #[test]
    fn every_scheme_damps_the_oscillator() {
        let span = TimeSpan::new(0.0, 60.0);
        let initial = State::new(0.0, 1.0);

        for (name, scheme) in SCHEMES {
            let trajectory = scheme(initial, span, 0.2, 0.05);
            assert_eq!(trajectory.len(), 1200, "{name}");
            assert_eq!(trajectory[0], initial, "{name}");

            let last = trajectory.last().expect("non-empty");
            assert!(last.energy() < 1e-3 * initial.energy(), "{name}: {last:?}");
        }
    }

    #[test]
    fn undamped_schemes_keep_energy_bounded() {
        let span = TimeSpan::new(0.0, 100.0);
        let initial = State::new(0.0, 1.0);

        for (name, scheme) in SCHEMES {
            let trajectory = scheme(initial, span, 0.0, 0.05);
            let drift = trajectory
                .iter()
                .map(|state| (state.energy() - initial.energy()).abs())
                .fold(0.0, f64::max);
            assert!(drift < 0.05, "{name}: {drift}");
        }
    }
}

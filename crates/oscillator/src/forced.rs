//! Every scheme applied to the forced oscillator `ṗ = −x − a·p + β·sin(ω·t)`.
//!
//! Each wrapper takes `(initial, span, a, beta, omega, h)`. Here `leapfrog`
//! is the implicit leapfrog, which handles the momentum-dependent damping
//! term exactly at the half step, and `leapfrog2` is the explicit one.

use contiv_core::{LinearRestoring, State, TimeSpan, Trajectory};
use contiv_integrators::{StepError, composition, contact, euler, leapfrog, variational};
use contiv_solvers::RootFinder;

use crate::params::{Forcing, Oscillator};

fn oscillator(a: f64, beta: f64, omega: f64) -> Oscillator {
    Oscillator::forced(a, Forcing::new(beta, omega))
}

fn acceleration(a: f64, beta: f64, omega: f64) -> impl Fn(f64, f64, f64) -> f64 + Copy {
    let oscillator = oscillator(a, beta, omega);
    move |x, p, t| oscillator.acceleration(x, p, t)
}

#[must_use]
pub fn euler(initial: State, span: TimeSpan, a: f64, beta: f64, omega: f64, h: f64) -> Trajectory {
    euler::euler(initial, span, h, acceleration(a, beta, omega))
}

/// Implicit leapfrog with the default root finder.
///
/// # Errors
///
/// Returns [`StepError::RootNotConverged`] for the first step whose
/// half-step momentum cannot be found.
pub fn leapfrog(
    initial: State,
    span: TimeSpan,
    a: f64,
    beta: f64,
    omega: f64,
    h: f64,
) -> Result<Trajectory, StepError> {
    let acc = acceleration(a, beta, omega);
    leapfrog::leapfrog_implicit(initial, span, h, acc, &RootFinder::default())
}

/// Explicit leapfrog.
#[must_use]
pub fn leapfrog2(
    initial: State,
    span: TimeSpan,
    a: f64,
    beta: f64,
    omega: f64,
    h: f64,
) -> Trajectory {
    leapfrog::leapfrog(initial, span, h, acceleration(a, beta, omega))
}

#[must_use]
pub fn pseudoleapfrog(
    initial: State,
    span: TimeSpan,
    a: f64,
    beta: f64,
    omega: f64,
    h: f64,
) -> Trajectory {
    composition::pseudo_leapfrog(initial, span, h, acceleration(a, beta, omega))
}

#[must_use]
pub fn ruth3(initial: State, span: TimeSpan, a: f64, beta: f64, omega: f64, h: f64) -> Trajectory {
    composition::ruth3(initial, span, h, acceleration(a, beta, omega))
}

#[must_use]
pub fn ruth4(initial: State, span: TimeSpan, a: f64, beta: f64, omega: f64, h: f64) -> Trajectory {
    composition::ruth4(initial, span, h, acceleration(a, beta, omega))
}

#[must_use]
pub fn contact(
    initial: State,
    span: TimeSpan,
    a: f64,
    beta: f64,
    omega: f64,
    h: f64,
) -> Trajectory {
    contact::contact(initial, span, h, a, LinearRestoring, Forcing::new(beta, omega))
}

#[must_use]
pub fn midpoint(
    initial: State,
    span: TimeSpan,
    a: f64,
    beta: f64,
    omega: f64,
    h: f64,
) -> Trajectory {
    contact::midpoint(initial, span, h, a, Forcing::new(beta, omega))
}

#[must_use]
pub fn symcontact(
    initial: State,
    span: TimeSpan,
    a: f64,
    beta: f64,
    omega: f64,
    h: f64,
) -> Trajectory {
    contact::symcontact(initial, span, h, a, LinearRestoring, Forcing::new(beta, omega))
}

#[must_use]
pub fn variational_noncontact(
    initial: State,
    span: TimeSpan,
    a: f64,
    beta: f64,
    omega: f64,
    h: f64,
) -> Trajectory {
    let forcing = Forcing::new(beta, omega);
    variational::variational_noncontact(initial, span, h, a, LinearRestoring, forcing)
}

//! Single-stage leapfrog formulations.
//!
//! [`leapfrog`] is the explicit kick-drift-kick form. It evaluates the
//! acceleration at the old momentum throughout, which is exact for separable
//! problems and an approximation otherwise. [`leapfrog_implicit`] is the
//! general form: the half-step momentum solves
//!
//! ```text
//! p − pint + h/2·acc(x, pint, t) = 0
//! ```
//!
//! by root finding, seeded with `p`.

use std::convert::Infallible;

use contiv_core::{Acceleration, Integrator, State, TimeSpan, Trajectory};
use contiv_solvers::RootFinder;

use crate::StepError;

/// Explicit leapfrog.
///
/// ```text
/// xnew = x + h·p + h²/2·acc(x, p, t)
/// pnew = p + h/2·(acc(x, p, t) + acc(xnew, p, t + h))
/// ```
#[must_use]
pub fn leapfrog(initial: State, span: TimeSpan, h: f64, acc: impl Acceleration) -> Trajectory {
    Trajectory::unfold(initial, span.steps(h), |i, State { p, x }| {
        let t = span.time_at(i, h);
        let kick = acc.acceleration(x, p, t);
        let x_new = x + h * p + h * h / 2.0 * kick;
        let p_new = p + h * (kick + acc.acceleration(x_new, p, t + h)) / 2.0;
        State::new(p_new, x_new)
    })
}

/// Implicit leapfrog with one scalar root solve per step.
///
/// # Errors
///
/// Returns [`StepError::RootNotConverged`] for the first step whose
/// half-step momentum cannot be found. No partial trajectory is returned.
pub fn leapfrog_implicit(
    initial: State,
    span: TimeSpan,
    h: f64,
    acc: impl Acceleration,
    finder: &RootFinder,
) -> Result<Trajectory, StepError> {
    Trajectory::generate(initial, span.steps(h), |i, State { p, x }| {
        let t = span.time_at(i, h);
        let residual = |p_half: f64| p - p_half + 0.5 * h * acc.acceleration(x, p_half, t);

        let p_half = finder
            .find(&residual, p)
            .map_err(|source| StepError::RootNotConverged {
                step: i,
                time: t,
                source,
            })?;

        let x_new = x + h * p_half;
        let p_new = p_half + 0.5 * h * acc.acceleration(x_new, p_half, t + h);
        Ok(State::new(p_new, x_new))
    })
}

/// Explicit leapfrog as an [`Integrator`].
#[derive(Debug, Clone, Copy)]
pub struct Leapfrog<A> {
    pub acceleration: A,
}

impl<A: Acceleration> Integrator for Leapfrog<A> {
    type Error = Infallible;

    fn integrate(&self, initial: State, span: TimeSpan, h: f64) -> Result<Trajectory, Infallible> {
        let acc = |x: f64, p: f64, t: f64| self.acceleration.acceleration(x, p, t);
        Ok(leapfrog(initial, span, h, acc))
    }
}

/// Implicit leapfrog as an [`Integrator`].
#[derive(Debug, Clone, Copy)]
pub struct ImplicitLeapfrog<A> {
    pub acceleration: A,
    pub finder: RootFinder,
}

impl<A: Acceleration> ImplicitLeapfrog<A> {
    /// Uses the default root finder.
    #[must_use]
    pub fn new(acceleration: A) -> Self {
        Self {
            acceleration,
            finder: RootFinder::default(),
        }
    }
}

impl<A: Acceleration> Integrator for ImplicitLeapfrog<A> {
    type Error = StepError;

    fn integrate(&self, initial: State, span: TimeSpan, h: f64) -> Result<Trajectory, StepError> {
        let acc = |x: f64, p: f64, t: f64| self.acceleration.acceleration(x, p, t);
        leapfrog_implicit(initial, span, h, acc, &self.finder)
    }
}

//! Newton's method with a finite-difference slope.
//!
//! Starting from a seed, each iteration replaces `x` with
//! `x − r(x) / r'(x)`, where `r'` is estimated by a central difference.
//! The solver stops when the residual or the Newton step meets the configured
//! tolerances, or after `max_iters` iterations.

mod action;
mod config;
mod error;
mod event;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use contiv_core::Observer;

use crate::equation::{Equation, Solution, Status, evaluate};

/// Finds a root of the equation using Newton's method seeded at `guess`.
///
/// Observers see every new iterate. Only a residual within `residual_tol`
/// counts as converged. A step below the x tolerances with a larger residual
/// returns [`Status::Stalled`]. Reaching `max_iters` is not an error: the
/// last iterate is returned with [`Status::MaxIters`].
///
/// # Errors
///
/// Returns an error if a residual is non-finite or the estimated slope is
/// zero or non-finite.
pub fn solve<E, Obs>(
    equation: &E,
    guess: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    E: Equation,
    Obs: Observer<Event, Action>,
{
    let mut eval = evaluate(equation, guess)?;
    if eval.residual.abs() <= config.residual_tol() {
        return Ok(Solution::from_eval(eval, Status::Converged, 0));
    }

    for iter in 1..=config.max_iters() {
        let slope = slope(equation, eval.x, config.fd_step());
        if !slope.is_finite() || slope == 0.0 {
            return Err(Error::DegenerateSlope { x: eval.x, slope });
        }

        let step = eval.residual / slope;
        eval = evaluate(equation, eval.x - step)?;

        let event = Event {
            iter,
            x: eval.x,
            residual: eval.residual,
            step,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(eval, Status::StoppedByObserver, iter));
        }

        if eval.residual.abs() <= config.residual_tol() {
            return Ok(Solution::from_eval(eval, Status::Converged, iter));
        }

        if step.abs() <= config.x_abs_tol() + config.x_rel_tol() * eval.x.abs() {
            return Ok(Solution::from_eval(eval, Status::Stalled, iter));
        }
    }

    Ok(Solution::from_eval(eval, Status::MaxIters, config.max_iters()))
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// Returns an error if a residual is non-finite or the estimated slope is
/// zero or non-finite.
pub fn solve_unobserved<E: Equation>(
    equation: &E,
    guess: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(equation, guess, config, ())
}

/// Central-difference slope of the residual at `x`.
fn slope(equation: &impl Equation, x: f64, fd_step: f64) -> f64 {
    let delta = fd_step * x.abs().max(1.0);
    (equation.residual(x + delta) - equation.residual(x - delta)) / (2.0 * delta)
}

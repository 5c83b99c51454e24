//! Bisection on a bracketed interval.
//!
//! Bisection halves a bracket `[left, right]` whose endpoint residuals have
//! opposite signs until the residual or the bracket width meets the
//! configured tolerances. Convergence is guaranteed for continuous residuals,
//! at one bit of accuracy per iteration.

mod action;
mod best;
mod bracket;
mod config;
mod error;
mod event;

pub use action::Action;
pub use bracket::{BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use contiv_core::Observer;

use crate::equation::{Equation, Solution, Status, evaluate};

use best::Best;
use bracket::{Bounds, Bracket};

/// Finds a root of the equation using the bisection method.
///
/// Observers see each iteration's midpoint evaluation and bracket.
/// Reaching `max_iters` is not an error: the best evaluation is returned
/// with [`Status::MaxIters`].
///
/// # Errors
///
/// Returns an error if the bracket is invalid, its endpoint residuals share a
/// sign, or any residual is non-finite.
pub fn solve<E, Obs>(
    equation: &E,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    E: Equation,
    Obs: Observer<Event, Action>,
{
    let bounds = Bounds::new(bracket)?;

    let left = evaluate(equation, bounds.left())?;
    if left.residual.abs() <= config.residual_tol() {
        return Ok(Solution::from_eval(left, Status::Converged, 0));
    }

    let right = evaluate(equation, bounds.right())?;
    if right.residual.abs() <= config.residual_tol() {
        return Ok(Solution::from_eval(right, Status::Converged, 0));
    }

    let left_sign = Sign::of(left.residual);
    if left_sign == Sign::of(right.residual) {
        return Err(Error::NoSignChange {
            left: left.x,
            right: right.x,
            left_residual: left.residual,
            right_residual: right.residual,
        });
    }

    let mut bracket = Bracket::new(bounds, left_sign);
    let mut best = Best::new(left);
    best.update(right);

    for iter in 1..=config.max_iters() {
        let mid = evaluate(equation, bracket.midpoint())?;

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            x: mid.x,
            residual: mid.residual,
        };

        best.update(mid);

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(best.finish(Status::StoppedByObserver, iter));
        }

        if mid.residual.abs() <= config.residual_tol() {
            return Ok(Solution::from_eval(mid, Status::Converged, iter));
        }

        bracket.shrink(mid.x, Sign::of(mid.residual));

        if bracket.is_x_converged(config.x_abs_tol(), config.x_rel_tol()) {
            return Ok(Solution::from_eval(mid, Status::Converged, iter));
        }
    }

    Ok(best.finish(Status::MaxIters, config.max_iters()))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, its endpoint residuals share a
/// sign, or any residual is non-finite.
pub fn solve_unobserved<E: Equation>(
    equation: &E,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(equation, bracket, config, ())
}

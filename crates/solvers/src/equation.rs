//! Solvers for scalar equations `r(x) = 0`.
//!
//! An [`Equation`] maps a trial value `x` to a residual. Solvers in this
//! module drive that residual toward zero and report each iteration to an
//! [`Observer`](contiv_core::Observer).
//!
//! # Solvers
//!
//! - [`newton`]: fast local convergence from a seed value
//! - [`bisection`]: guaranteed convergence on a bracketed interval

mod evaluate;
mod solution;

pub use evaluate::{EvalError, Evaluation, evaluate};
pub use solution::{Solution, Status};

pub mod bisection;
pub mod newton;

/// A scalar equation `r(x) = 0`.
///
/// Any `Fn(f64) -> f64` closure is an equation.
pub trait Equation {
    /// Returns the residual at `x`.
    fn residual(&self, x: f64) -> f64;
}

impl<F> Equation for F
where
    F: Fn(f64) -> f64,
{
    fn residual(&self, x: f64) -> f64 {
        self(x)
    }
}

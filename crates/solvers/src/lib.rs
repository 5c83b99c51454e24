//! Bounded scalar root finders for the implicit contiv schemes.
//!
//! The implicit schemes solve one scalar equation per step. This crate
//! provides the solvers they use and the [`RootFinder`] strategy value that
//! selects between them:
//!
//! - [`equation::newton`]: Newton's method with a finite-difference slope
//! - [`equation::bisection`]: guaranteed convergence on a bracketed interval
//!
//! Both solvers stop after a bounded number of iterations and report how they
//! finished through a [`Status`](equation::Status). Turning a non-converged
//! status into a hard failure is left to [`RootFinder::find`].

pub mod equation;

mod root;

pub use root::{RootError, RootFinder};

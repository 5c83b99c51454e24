//! The damped, sinusoidally forced harmonic oscillator
//!
//! ```text
//! ẋ = p
//! ṗ = −x − a·p + β·sin(ω·t)
//! ```
//!
//! This crate is the experiment side of contiv. It fixes the problem-specific
//! closures for every scheme in [`contiv_integrators`] and supplies what a
//! comparison needs around them:
//!
//! - [`params`]: the oscillator and forcing parameters as value types
//! - [`reference`]: the closed-form steady-state solution and its derivative
//! - [`error_metric`]: the regularized relative error used for reporting
//! - [`rk4`]: a classical fourth-order baseline computed with `ode_solvers`
//! - [`damped`] and [`forced`]: one wrapper per scheme with the closures fixed
//!
//! # Example
//!
//! ```
//! use contiv_core::{State, TimeSpan};
//! use contiv_oscillator::{error_metric::relerr_default, forced, reference::SteadyState};
//! use contiv_oscillator::params::{Forcing, Oscillator};
//!
//! let oscillator = Oscillator::forced(0.3, Forcing::new(1.0, 2.0));
//! let exact = SteadyState::new(&oscillator);
//! let span = TimeSpan::new(0.0, 20.0);
//!
//! let trajectory = forced::symcontact(exact.state(0.0), span, 0.3, 1.0, 2.0, 0.05);
//! let last = trajectory.len() - 1;
//! let error = relerr_default(exact.position(span.time_at(last, 0.05)), trajectory[last].x);
//! assert!(error < 1e-2);
//! ```

pub mod damped;
pub mod error_metric;
pub mod forced;
pub mod params;
pub mod reference;
pub mod rk4;

pub use params::{Forcing, Oscillator, forcing};
pub use reference::{SteadyState, dreference, reference};
pub use rk4::{Rk4, Rk4Error};

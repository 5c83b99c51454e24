//! Time-stepping schemes for the damped, optionally forced oscillator.
//!
//! Every scheme advances a [`State`](contiv_core::State) `(p, x)` over a
//! [`TimeSpan`](contiv_core::TimeSpan) with a fixed step `h` and returns a
//! [`Trajectory`](contiv_core::Trajectory) of
//! [`steps(span, h)`](contiv_core::steps) states. Each is offered both as a
//! free function and as a value implementing
//! [`Integrator`](contiv_core::Integrator).
//!
//! # Families
//!
//! - [`composition`]: splitting methods driven by a [`CoefficientTable`]
//! - [`leapfrog`]: explicit and implicit single-stage leapfrog
//! - [`euler`]: symplectic Euler
//! - [`contact`]: closed-form contact-variational schemes with linear damping
//! - [`variational`]: the forced (non-contact) variational scheme
//! - [`del`]: steppers generated from a symbolic discrete Lagrangian
//!
//! Closed-form schemes cannot fail. Schemes that solve an equation per step
//! (implicit leapfrog, implicit generated steppers) fail with [`StepError`]
//! and abort the whole trajectory.

pub mod composition;
pub mod contact;
pub mod del;
pub mod euler;
pub mod leapfrog;
pub mod variational;

mod error;

pub use composition::{CoefficientTable, Composition, Stage};
pub use contact::{Contact, ContactOrder, MidpointContact};
pub use del::{DelStepper, DiscreteLagrangian, Generator, Mode};
pub use error::{ConstructionError, StepError};
pub use euler::Euler;
pub use leapfrog::{ImplicitLeapfrog, Leapfrog};
pub use variational::Variational;

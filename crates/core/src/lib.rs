//! Core traits and types for contiv time-stepping schemes.
//!
//! This crate defines the shared abstractions that every integrator builds on:
//!
//! - [`State`]: a `(p, x)` momentum/position pair
//! - [`TimeSpan`] and [`steps`]: the integration interval and the number of
//!   states a trajectory over it holds
//! - [`Trajectory`]: the fixed-length, immutable sequence of states produced
//!   by one stepping pass
//! - [`Acceleration`], [`Forcing`], [`Restoring`]: the problem-specific
//!   closures a scheme consumes
//! - [`Integrator`]: the shared "given a state and a step, produce the next
//!   state" contract
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod integrator;
mod observer;
mod state;
mod time;
mod trajectory;

pub use function::{Acceleration, Forcing, LinearRestoring, NoForcing, Restoring, RestoringFn};
pub use integrator::Integrator;
pub use observer::Observer;
pub use state::State;
pub use time::{TimeSpan, steps};
pub use trajectory::Trajectory;

use crate::{State, TimeSpan, Trajectory};

/// A time-stepping scheme: given a state and a step, produce the next state.
///
/// Every scheme sizes its output with [`steps`](crate::steps), stores the
/// initial condition at index 0, and computes each following state only from
/// its predecessor (and the absolute time `span.start + i·h`).
/// Calling `integrate` twice with identical inputs yields identical
/// trajectories; schemes hold no state between calls.
///
/// `h > 0` and a non-empty span are caller responsibilities. Degenerate
/// inputs produce an empty trajectory rather than an error.
pub trait Integrator {
    /// The step-time failure of the scheme.
    ///
    /// Closed-form schemes use [`std::convert::Infallible`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the full trajectory from `initial` over `span` with step `h`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if any step fails. The whole computation is
    /// aborted and no partial trajectory is returned.
    fn integrate(&self, initial: State, span: TimeSpan, h: f64) -> Result<Trajectory, Self::Error>;
}

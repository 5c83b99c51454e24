use std::convert::Infallible;

use contiv_core::{Acceleration, Integrator, State, TimeSpan, Trajectory};

/// Symplectic Euler: kick with the old state, then drift with the new momentum.
///
/// ```text
/// pnew = p + h·acc(x, p, t0 + i·h)
/// xnew = x + h·pnew
/// ```
#[must_use]
pub fn euler(initial: State, span: TimeSpan, h: f64, acc: impl Acceleration) -> Trajectory {
    Trajectory::unfold(initial, span.steps(h), |i, State { p, x }| {
        let p_new = p + h * acc.acceleration(x, p, span.time_at(i, h));
        State::new(p_new, x + h * p_new)
    })
}

/// Symplectic Euler as an [`Integrator`].
#[derive(Debug, Clone, Copy)]
pub struct Euler<A> {
    pub acceleration: A,
}

impl<A: Acceleration> Integrator for Euler<A> {
    type Error = Infallible;

    fn integrate(&self, initial: State, span: TimeSpan, h: f64) -> Result<Trajectory, Infallible> {
        let acc = |x: f64, p: f64, t: f64| self.acceleration.acceleration(x, p, t);
        Ok(euler(initial, span, h, acc))
    }
}

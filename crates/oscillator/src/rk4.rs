//! Classical fourth-order Runge–Kutta baseline.
//!
//! The oscillator is handed to [`ode_solvers::Rk4`] as a first-order system
//! in `y = (p, x)`. Its output is cut to the scheme grid, so a baseline
//! trajectory is indexed exactly like every other scheme's.

use contiv_core::{Integrator, State, TimeSpan, Trajectory};
use ode_solvers::{SVector, System, dop_shared::IntegrationError};
use thiserror::Error;

use crate::params::{Forcing, Oscillator};

type Vector2 = SVector<f64, 2>;

/// Errors from the RK4 baseline.
#[derive(Debug, Error)]
pub enum Rk4Error {
    #[error(transparent)]
    IntegrationError(#[from] IntegrationError),

    #[error("integration produced {produced} states, expected {expected}")]
    ShortOutput { produced: usize, expected: usize },
}

/// The RK4 baseline for one oscillator, usable as an [`Integrator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rk4 {
    pub oscillator: Oscillator,
}

impl Rk4 {
    #[must_use]
    pub fn new(oscillator: Oscillator) -> Self {
        Self { oscillator }
    }
}

impl Integrator for Rk4 {
    type Error = Rk4Error;

    /// Integrates with fixed step `h` and samples the result on the scheme grid.
    ///
    /// # Errors
    ///
    /// Returns [`Rk4Error::IntegrationError`] if the underlying stepper fails,
    /// or [`Rk4Error::ShortOutput`] if it stops before the last grid point.
    fn integrate(&self, initial: State, span: TimeSpan, h: f64) -> Result<Trajectory, Rk4Error> {
        let expected = span.steps(h);
        if expected <= 1 {
            return Ok(Trajectory::unfold(initial, expected, |_, state| state));
        }

        // Half a step past the last grid point, so rounding never drops it.
        #[allow(clippy::cast_precision_loss)]
        let x_end = span.start + (expected as f64 - 0.5) * h;
        let y_start = Vector2::new(initial.p, initial.x);

        let system = OscillatorSystem {
            oscillator: self.oscillator,
        };
        let mut stepper = ode_solvers::Rk4::new(system, span.start, y_start, x_end, h);
        let stats = stepper.integrate()?;
        log::debug!(
            "rk4 baseline: {} accepted steps, {} evaluations",
            stats.accepted_steps,
            stats.num_eval
        );

        let samples = stepper.y_out();
        if samples.len() < expected {
            return Err(Rk4Error::ShortOutput {
                produced: samples.len(),
                expected,
            });
        }

        Ok(Trajectory::unfold(initial, expected, |i, _| {
            let y = samples[i + 1];
            State::new(y[0], y[1])
        }))
    }
}

/// Adapts the oscillator into an `ode_solvers` system.
struct OscillatorSystem {
    oscillator: Oscillator,
}

impl System<f64, Vector2> for OscillatorSystem {
    fn system(&self, t: f64, y: &Vector2, dy: &mut Vector2) {
        let (p, x) = (y[0], y[1]);
        dy[0] = self.oscillator.acceleration(x, p, t);
        dy[1] = p;
    }
}

/// RK4 baseline for the unforced oscillator with damping `a`.
///
/// # Errors
///
/// See [`Rk4::integrate`](Integrator::integrate).
pub fn rk4(initial: State, span: TimeSpan, a: f64, h: f64) -> Result<Trajectory, Rk4Error> {
    Rk4::new(Oscillator::damped(a)).integrate(initial, span, h)
}

/// RK4 baseline for the oscillator with damping `a` and forcing `β·sin(ω·t)`.
///
/// # Errors
///
/// See [`Rk4::integrate`](Integrator::integrate).
pub fn rk4_forced(
    initial: State,
    span: TimeSpan,
    a: f64,
    beta: f64,
    omega: f64,
    h: f64,
) -> Result<Trajectory, Rk4Error> {
    Rk4::new(Oscillator::forced(a, Forcing::new(beta, omega))).integrate(initial, span, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::reference::SteadyState;

    #[test]
    fn grid_length_matches_schemes() {
        let span = TimeSpan::new(0.0, 10.0);
        for h in [0.1, 0.3, 0.07] {
            let trajectory = rk4(State::new(0.0, 1.0), span, 0.1, h).expect("integrates");
            assert_eq!(trajectory.len(), span.steps(h));
        }
    }

    #[test]
    fn starts_from_initial_state() {
        let initial = State::new(0.2, -0.4);
        let trajectory = rk4(initial, TimeSpan::new(0.0, 1.0), 0.5, 0.1).expect("integrates");
        assert_eq!(trajectory[0], initial);
    }

    #[test]
    fn undamped_matches_cosine() {
        let h = 0.01;
        let trajectory = rk4(State::new(0.0, 1.0), TimeSpan::new(0.0, 10.0), 0.0, h)
            .expect("integrates");

        for (i, state) in trajectory.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 * h;
            assert_relative_eq!(state.x, t.cos(), epsilon = 1e-8);
            assert_relative_eq!(state.p, -t.sin(), epsilon = 1e-8);
        }
    }

    #[test]
    fn forced_tracks_steady_state() {
        let oscillator = Oscillator::forced(0.3, Forcing::new(1.0, 2.0));
        let exact = SteadyState::new(&oscillator);
        let span = TimeSpan::new(0.0, 20.0);
        let h = 0.05;

        let trajectory = rk4_forced(exact.state(0.0), span, 0.3, 1.0, 2.0, h).expect("integrates");
        let last = trajectory.len() - 1;
        assert_relative_eq!(
            trajectory[last].x,
            exact.position(span.time_at(last, h)),
            epsilon = 1e-4
        );
    }

    #[test]
    fn empty_and_single_state_spans() {
        let initial = State::new(1.0, 0.0);
        assert!(rk4(initial, TimeSpan::new(0.0, 0.05), 0.1, 0.1).expect("empty").is_empty());
        assert_eq!(rk4(initial, TimeSpan::new(0.0, 0.15), 0.1, 0.1).expect("single").len(), 1);
    }
}

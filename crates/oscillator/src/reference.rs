//! Closed-form steady-state solution of the forced oscillator.
//!
//! Once transients have decayed, the damped oscillator driven by
//! `β·sin(ω·t)` follows
//!
//! ```text
//! x(t) = −β / √((ωa)² + (1 − ω²)²) · sin(ω·t + φ),   φ = atan2(aω, ω² − 1)
//! ```
//!
//! Starting a scheme from [`SteadyState::state`] removes the transient, so
//! the difference to this solution is pure discretization error.

use contiv_core::State;

use crate::params::{Forcing, Oscillator};

/// The steady-state response `A·sin(ω·t + φ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyState {
    amplitude: f64,
    omega: f64,
    phase: f64,
}

impl SteadyState {
    #[must_use]
    pub fn new(oscillator: &Oscillator) -> Self {
        let a = oscillator.damping;
        let Forcing { beta, omega } = oscillator.forcing;

        let phase = (a * omega).atan2(omega * omega - 1.0);
        let amplitude = -beta / ((omega * a).powi(2) + (1.0 - omega * omega).powi(2)).sqrt();

        Self {
            amplitude,
            omega,
            phase,
        }
    }

    /// Signed amplitude `A`.
    #[must_use]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Phase shift `φ`.
    #[must_use]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Position `x(t)`.
    #[must_use]
    pub fn position(&self, t: f64) -> f64 {
        self.amplitude * (self.omega * t + self.phase).sin()
    }

    /// Momentum `ẋ(t)`.
    #[must_use]
    pub fn momentum(&self, t: f64) -> f64 {
        self.amplitude * self.omega * (self.omega * t + self.phase).cos()
    }

    /// The `(p, x)` state at time `t`.
    #[must_use]
    pub fn state(&self, t: f64) -> State {
        State::new(self.momentum(t), self.position(t))
    }
}

/// Returns the steady-state position `t ↦ x(t)`.
#[must_use]
pub fn reference(a: f64, beta: f64, omega: f64) -> impl Fn(f64) -> f64 + Copy {
    let solution = SteadyState::new(&Oscillator::forced(a, Forcing::new(beta, omega)));
    move |t| solution.position(t)
}

/// Returns the steady-state momentum `t ↦ ẋ(t)`.
#[must_use]
pub fn dreference(a: f64, beta: f64, omega: f64) -> impl Fn(f64) -> f64 + Copy {
    let solution = SteadyState::new(&Oscillator::forced(a, Forcing::new(beta, omega)));
    move |t| solution.momentum(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn satisfies_the_equation_of_motion() {
        let (a, beta, omega) = (0.3, 1.0, 2.0);
        let x = reference(a, beta, omega);
        let v = dreference(a, beta, omega);
        let oscillator = Oscillator::forced(a, Forcing::new(beta, omega));

        let d = 1e-5;
        for t in [0.0, 0.7, 3.1, 10.0] {
            let accel = (v(t + d) - v(t - d)) / (2.0 * d);
            assert_relative_eq!(accel, oscillator.acceleration(x(t), v(t), t), epsilon = 1e-8);
        }
    }

    #[test]
    fn derivative_matches_position() {
        let x = reference(0.5, 2.0, 0.7);
        let v = dreference(0.5, 2.0, 0.7);

        let d = 1e-6;
        let t = 1.3;
        assert_relative_eq!((x(t + d) - x(t - d)) / (2.0 * d), v(t), epsilon = 1e-8);
    }

    #[test]
    fn resonance_amplitude_is_inverse_damping() {
        let solution = SteadyState::new(&Oscillator::forced(0.25, Forcing::new(1.0, 1.0)));
        assert_relative_eq!(solution.amplitude(), -4.0, epsilon = 1e-12);
        assert_relative_eq!(solution.phase(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn unforced_reference_is_zero() {
        let x = reference(0.3, 0.0, 2.0);
        assert_relative_eq!(x(4.2), 0.0);
    }
}

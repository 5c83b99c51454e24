//! Shared fixtures for the cross-crate tests.

use contiv_core::Trajectory;
use contiv_solvers::{RootFinder, equation::newton};

/// A Newton finder tight enough that 1000 implicit steps stay within 1e-8
/// of the explicit update.
#[must_use]
pub fn tight_newton() -> RootFinder {
    match newton::Config::new(50, 1e-13, 1e-15, 1e-14, 1e-7) {
        Ok(config) => RootFinder::Newton(config),
        Err(error) => panic!("tight Newton config is valid: {error}"),
    }
}

/// The largest energy in each consecutive window of `window` states.
///
/// A trailing partial window is dropped.
#[must_use]
pub fn windowed_peak_energy(trajectory: &Trajectory, window: usize) -> Vec<f64> {
    trajectory
        .states()
        .chunks_exact(window)
        .map(|chunk| chunk.iter().map(|s| s.energy()).fold(0.0, f64::max))
        .collect()
}

/// The ratio of the coarse to the fine error after halving the step.
///
/// A method of order `k` gives roughly `2^k`.
#[must_use]
pub fn halving_ratio(coarse: f64, fine: f64) -> f64 {
    coarse / fine
}

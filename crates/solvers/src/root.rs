use thiserror::Error;

use crate::equation::{Equation, Solution, Status, bisection, newton};

/// Strategy for the one scalar solve an implicit scheme performs per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootFinder {
    /// Newton's method seeded at the predictor value.
    Newton(newton::Config),

    /// Bisection on `seed ± max(half_width, half_width · |seed|)`.
    Bisection {
        config: bisection::Config,
        half_width: f64,
    },
}

/// Errors that can occur while finding a root.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RootError {
    /// The solver finished without meeting its tolerances.
    #[error("root finder stopped ({status:?}) after {iters} iterations at x = {x}, residual = {residual}")]
    NotConverged {
        status: Status,
        x: f64,
        residual: f64,
        iters: usize,
    },

    #[error("newton: {0}")]
    Newton(#[from] newton::Error),

    #[error("bisection: {0}")]
    Bisection(#[from] bisection::Error),
}

impl Default for RootFinder {
    fn default() -> Self {
        Self::Newton(newton::Config::default())
    }
}

impl RootFinder {
    /// Bisection with the default config around the seed.
    #[must_use]
    pub fn bisection(half_width: f64) -> Self {
        Self::Bisection {
            config: bisection::Config::default(),
            half_width,
        }
    }

    /// Solves `equation(x) = 0` starting from `seed`.
    ///
    /// Only a converged solve is returned; every other outcome is an error.
    ///
    /// # Errors
    ///
    /// Returns [`RootError::NotConverged`] if the iteration cap is reached,
    /// or the underlying solver error if the solve fails outright.
    pub fn find<E: Equation>(&self, equation: &E, seed: f64) -> Result<f64, RootError> {
        let solution = match self {
            Self::Newton(config) => newton::solve(
                equation,
                seed,
                config,
                |event: &newton::Event| -> Option<newton::Action> {
                    log::trace!(
                        "newton iter {}: x = {}, residual = {}",
                        event.iter,
                        event.x,
                        event.residual
                    );
                    None
                },
            )?,
            Self::Bisection { config, half_width } => {
                let reach = half_width.max(half_width * seed.abs());
                bisection::solve(
                    equation,
                    [seed - reach, seed + reach],
                    config,
                    |event: &bisection::Event| -> Option<bisection::Action> {
                        log::trace!(
                            "bisection iter {}: bracket = {:?}, residual = {}",
                            event.iter,
                            event.bracket,
                            event.residual
                        );
                        None
                    },
                )?
            }
        };

        converged(solution)
    }
}

fn converged(solution: Solution) -> Result<f64, RootError> {
    if solution.is_converged() {
        Ok(solution.x)
    } else {
        log::warn!(
            "root solve finished with {:?} after {} iterations (residual {})",
            solution.status,
            solution.iters,
            solution.residual
        );
        Err(RootError::NotConverged {
            status: solution.status,
            x: solution.x,
            residual: solution.residual,
            iters: solution.iters,
        })
    }
}

use thiserror::Error;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
    x_abs_tol: f64,
    x_rel_tol: f64,
    fd_step: f64,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and non-negative")]
    Residual,

    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("x_rel_tol must be finite and non-negative")]
    XRel,

    #[error("fd_step must be finite and positive")]
    FdStep,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            residual_tol: 1e-10,
            x_abs_tol: 1e-14,
            x_rel_tol: 1e-12,
            fd_step: 1e-7,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// The slope is estimated by a central difference with half-width
    /// `fd_step · max(1, |x|)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative or non-finite, or if
    /// `fd_step` is not strictly positive.
    pub fn new(
        max_iters: usize,
        residual_tol: f64,
        x_abs_tol: f64,
        x_rel_tol: f64,
        fd_step: f64,
    ) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::Residual);
        }
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !x_rel_tol.is_finite() || x_rel_tol < 0.0 {
            return Err(ConfigError::XRel);
        }
        if !fd_step.is_finite() || fd_step <= 0.0 {
            return Err(ConfigError::FdStep);
        }

        Ok(Self {
            max_iters,
            residual_tol,
            x_abs_tol,
            x_rel_tol,
            fd_step,
        })
    }

    /// Returns the maximum number of Newton iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the residual magnitude accepted as a root.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the absolute tolerance on the Newton step.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the relative tolerance on the Newton step.
    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }

    /// Returns the relative finite-difference half-width.
    #[must_use]
    pub fn fd_step(&self) -> f64 {
        self.fd_step
    }
}

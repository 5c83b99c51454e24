use thiserror::Error;

use crate::equation::EvalError;

/// Errors that can occur during Newton iteration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// The finite-difference slope is zero or non-finite.
    #[error("degenerate slope {slope} at x = {x}")]
    DegenerateSlope { x: f64, slope: f64 },
}

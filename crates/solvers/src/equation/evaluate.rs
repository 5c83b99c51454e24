use thiserror::Error;

use super::Equation;

/// A residual evaluated at a trial value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub x: f64,
    pub residual: f64,
}

/// Errors that can occur when evaluating an equation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    /// The residual is `NaN` or infinite.
    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },
}

/// Evaluates the equation at `x`.
///
/// # Errors
///
/// Returns [`EvalError::NonFiniteResidual`] if the residual is not finite.
pub fn evaluate(equation: &impl Equation, x: f64) -> Result<Evaluation, EvalError> {
    let residual = equation.residual(x);
    if !residual.is_finite() {
        return Err(EvalError::NonFiniteResidual { x, residual });
    }
    Ok(Evaluation { x, residual })
}

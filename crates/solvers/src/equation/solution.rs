use super::Evaluation;

/// Indicates how a root finder terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer action.
    StoppedByObserver,
    /// Steps fell below the x tolerances while the residual stayed above
    /// its tolerance, as at a jump in the residual.
    Stalled,
}

/// The result of a root solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Best estimate of the root.
    pub x: f64,
    /// Residual at the reported root estimate.
    pub residual: f64,
    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// Constructs a solution from an evaluation.
    pub(crate) fn from_eval(eval: Evaluation, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: eval.x,
            residual: eval.residual,
            iters,
        }
    }

    /// Returns `true` if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

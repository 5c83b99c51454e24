use contiv_solvers::RootError;
use contiv_symbolic::{CompileError, SolveError};
use thiserror::Error;

/// A step-time failure that aborts a trajectory computation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StepError {
    /// The per-step root solve did not converge.
    #[error("root solve failed at step {step} (t = {time})")]
    RootNotConverged {
        /// Index of the state the failed step started from.
        step: usize,
        /// Absolute time of that state.
        time: f64,
        #[source]
        source: RootError,
    },
}

/// A construction-time failure of the discrete Euler–Lagrange generator.
///
/// These are reported before any state is produced and never appear on the
/// stepping path.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConstructionError {
    /// A derived relation mentions a symbol the stepper cannot supply,
    /// typically a leftover `z0` or `z1`.
    #[error("cannot evaluate the {relation} relation")]
    Unevaluable {
        relation: &'static str,
        #[source]
        source: CompileError,
    },

    /// The explicit update could not be isolated from the momentum relation.
    #[error("cannot solve the start momentum relation for x1")]
    Unsolvable(#[source] SolveError),
}

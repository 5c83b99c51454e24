use crate::equation::{Evaluation, Solution, Status};

/// Tracks the evaluation with the smallest residual magnitude.
pub(super) struct Best {
    eval: Evaluation,
}

impl Best {
    pub(super) fn new(eval: Evaluation) -> Self {
        Self { eval }
    }

    /// Replaces the best evaluation if `eval` has a strictly smaller residual.
    pub(super) fn update(&mut self, eval: Evaluation) {
        if eval.residual.abs() < self.eval.residual.abs() {
            self.eval = eval;
        }
    }

    pub(super) fn finish(self, status: Status, iters: usize) -> Solution {
        Solution::from_eval(self.eval, status, iters)
    }
}

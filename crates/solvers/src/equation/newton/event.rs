/// Iteration event emitted by the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// The new iterate.
    pub x: f64,
    /// Residual at the new iterate.
    pub residual: f64,
    /// The Newton step that produced the iterate.
    pub step: f64,
}

/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,
    /// Search bracket before this iteration's midpoint is applied.
    pub bracket: [f64; 2],
    /// The midpoint that was evaluated.
    pub x: f64,
    /// Residual at the midpoint.
    pub residual: f64,
}

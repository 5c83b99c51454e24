/// The closed interval `[start, end]` a trajectory is computed over.
///
/// A span is not validated: an empty or reversed span simply produces a
/// trajectory with no states, see [`steps`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TimeSpan {
    /// First grid time `t0`.
    pub start: f64,

    /// Upper end `t1`. It is a grid point only when `(t1 − t0)/h` is whole.
    pub end: f64,
}

impl TimeSpan {
    /// Creates a time span from its endpoints.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns the span length `end - start`.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Returns the number of states a trajectory with step `h` holds.
    ///
    /// Equivalent to [`steps(self, h)`](steps).
    #[must_use]
    pub fn steps(&self, h: f64) -> usize {
        steps(*self, h)
    }

    /// Returns the absolute time `start + index·h` of grid point `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time_at(&self, index: usize, h: f64) -> f64 {
        self.start + index as f64 * h
    }
}

impl From<(f64, f64)> for TimeSpan {
    fn from((start, end): (f64, f64)) -> Self {
        Self { start, end }
    }
}

/// Returns `floor((end - start) / h)`, the length of every trajectory over `span`.
///
/// All schemes size their output with this function so that trajectories
/// computed with the same span and step are comparably indexed.
///
/// A non-positive, non-finite, or NaN quotient (for example `h <= 0` or a
/// reversed span) yields zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn steps(span: TimeSpan, h: f64) -> usize {
    let count = (span.duration() / h).floor();
    if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    }
}

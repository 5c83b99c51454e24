/// The phase-space state of a one-degree-of-freedom system.
///
/// A state is a plain value: two states are the same exactly when their
/// momentum and position agree.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct State {
    /// Generalized momentum.
    pub p: f64,

    /// Generalized position.
    pub x: f64,
}

impl State {
    /// Creates a state from momentum and position.
    #[must_use]
    pub fn new(p: f64, x: f64) -> Self {
        Self { p, x }
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.p.is_finite() && self.x.is_finite()
    }

    /// Returns the harmonic energy `(p² + x²) / 2` of the unit oscillator.
    #[must_use]
    pub fn energy(&self) -> f64 {
        0.5 * (self.p * self.p + self.x * self.x)
    }
}

impl From<(f64, f64)> for State {
    /// Converts a `(p, x)` tuple into a state.
    fn from((p, x): (f64, f64)) -> Self {
        Self { p, x }
    }
}

impl From<State> for (f64, f64) {
    fn from(state: State) -> Self {
        (state.p, state.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn tuple_round_trip_keeps_order() {
        let state = State::from((1.5, -2.0));
        assert_relative_eq!(state.p, 1.5);
        assert_relative_eq!(state.x, -2.0);

        let (p, x) = state.into();
        assert_relative_eq!(p, 1.5);
        assert_relative_eq!(x, -2.0);
    }

    #[test]
    fn energy_of_unit_circle() {
        let state = State::new(0.6, 0.8);
        assert_relative_eq!(state.energy(), 0.5);
    }

    #[test]
    fn detects_non_finite_components() {
        assert!(State::new(0.0, 1.0).is_finite());
        assert!(!State::new(f64::NAN, 1.0).is_finite());
        assert!(!State::new(0.0, f64::INFINITY).is_finite());
    }
}

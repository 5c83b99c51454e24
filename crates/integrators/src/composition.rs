//! Multi-stage splitting integrators driven by a coefficient table.
//!
//! Each stage of a step kicks the momentum and then drifts the position:
//!
//! ```text
//! p += b·acc(x, p, t)·h
//! x += a·p·h
//! t += a·h
//! ```
//!
//! The clock `t` is threaded through every stage of every step and is never
//! re-anchored to `t0 + i·h`, so the time seen by a stage is the cumulative
//! sum of the drift fractions that preceded it.
//!
//! The named schemes are fixed tables; see Candy & Rozmus (1991) for the
//! derivation of the coefficients.

use std::convert::Infallible;

use contiv_core::{Acceleration, Integrator, State, TimeSpan, Trajectory};

/// One kick/drift pair of a splitting method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    /// Drift fraction.
    pub a: f64,
    /// Kick fraction.
    pub b: f64,
}

/// The ordered stages of a splitting method.
///
/// A consistent table has `Σa = Σb = 1`. This is a precondition, not a
/// checked invariant: an inconsistent table silently produces a less
/// accurate scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    stages: Vec<Stage>,
}

impl CoefficientTable {
    /// Creates a table from its stages.
    #[must_use]
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// Drift-kick-drift leapfrog: `a = [½, ½]`, `b = [0, 1]`.
    #[must_use]
    pub fn leapfrog() -> Self {
        Self::from_rows(&[0.5, 0.5], &[0.0, 1.0])
    }

    /// Kick-drift-kick pseudo-leapfrog: `a = [1, 0]`, `b = [½, ½]`.
    ///
    /// For a position-only acceleration this is the explicit leapfrog.
    #[must_use]
    pub fn pseudo_leapfrog() -> Self {
        Self::from_rows(&[1.0, 0.0], &[0.5, 0.5])
    }

    /// Ruth's third-order coefficients.
    #[must_use]
    pub fn ruth3() -> Self {
        Self::from_rows(&[2.0 / 3.0, -2.0 / 3.0, 1.0], &[7.0 / 24.0, 0.75, -1.0 / 24.0])
    }

    /// Ruth's fourth-order coefficients, built on the split `c = 2^(1/3)`.
    ///
    /// On the damped oscillator this table does worse than [`ruth3`](Self::ruth3).
    #[must_use]
    pub fn ruth4() -> Self {
        let c = 2.0_f64.cbrt();
        let scale = 1.0 / (2.0 - c);
        let a = [0.5, 0.5 * (1.0 - c), 0.5 * (1.0 - c), 0.5].map(|v| v * scale);
        let b = [0.0, 1.0, -c, 1.0].map(|v| v * scale);
        Self::from_rows(&a, &b)
    }

    fn from_rows(a: &[f64], b: &[f64]) -> Self {
        Self::new(a.iter().zip(b).map(|(&a, &b)| Stage { a, b }).collect())
    }

    /// The stages in execution order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Returns `(Σa, Σb)`.
    #[must_use]
    pub fn sums(&self) -> (f64, f64) {
        self.stages
            .iter()
            .fold((0.0, 0.0), |(sa, sb), stage| (sa + stage.a, sb + stage.b))
    }
}

impl FromIterator<Stage> for CoefficientTable {
    fn from_iter<I: IntoIterator<Item = Stage>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Integrates with the splitting method described by `table`.
#[must_use]
pub fn symint(
    initial: State,
    span: TimeSpan,
    h: f64,
    table: &CoefficientTable,
    acc: impl Acceleration,
) -> Trajectory {
    let mut t = span.start;
    Trajectory::unfold(initial, span.steps(h), |_, State { mut p, mut x }| {
        for stage in table.stages() {
            p += stage.b * acc.acceleration(x, p, t) * h;
            x += stage.a * p * h;
            t += stage.a * h;
        }
        State::new(p, x)
    })
}

/// Drift-kick-drift leapfrog through the composition engine.
#[must_use]
pub fn composed_leapfrog(
    initial: State,
    span: TimeSpan,
    h: f64,
    acc: impl Acceleration,
) -> Trajectory {
    symint(initial, span, h, &CoefficientTable::leapfrog(), acc)
}

/// Pseudo-leapfrog in the sense of Candy & Rozmus.
#[must_use]
pub fn pseudo_leapfrog(
    initial: State,
    span: TimeSpan,
    h: f64,
    acc: impl Acceleration,
) -> Trajectory {
    symint(initial, span, h, &CoefficientTable::pseudo_leapfrog(), acc)
}

/// Ruth's third-order splitting method.
#[must_use]
pub fn ruth3(initial: State, span: TimeSpan, h: f64, acc: impl Acceleration) -> Trajectory {
    symint(initial, span, h, &CoefficientTable::ruth3(), acc)
}

/// Ruth's fourth-order splitting method.
#[must_use]
pub fn ruth4(initial: State, span: TimeSpan, h: f64, acc: impl Acceleration) -> Trajectory {
    symint(initial, span, h, &CoefficientTable::ruth4(), acc)
}

/// A splitting method paired with its acceleration, usable as an [`Integrator`].
#[derive(Debug, Clone)]
pub struct Composition<A> {
    table: CoefficientTable,
    acceleration: A,
}

impl<A: Acceleration> Composition<A> {
    /// Pairs a coefficient table with the acceleration it integrates.
    #[must_use]
    pub fn new(table: CoefficientTable, acceleration: A) -> Self {
        Self {
            table,
            acceleration,
        }
    }

    #[must_use]
    pub fn table(&self) -> &CoefficientTable {
        &self.table
    }
}

impl<A: Acceleration> Integrator for Composition<A> {
    type Error = Infallible;

    fn integrate(&self, initial: State, span: TimeSpan, h: f64) -> Result<Trajectory, Infallible> {
        let acc = |x: f64, p: f64, t: f64| self.acceleration.acceleration(x, p, t);
        Ok(symint(initial, span, h, &self.table, acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn oscillator(x: f64, _p: f64, _t: f64) -> f64 {
        -x
    }

    #[test]
    fn named_tables_are_consistent() {
        for table in [
            CoefficientTable::leapfrog(),
            CoefficientTable::pseudo_leapfrog(),
            CoefficientTable::ruth3(),
            CoefficientTable::ruth4(),
        ] {
            let (sa, sb) = table.sums();
            assert_relative_eq!(sa, 1.0, epsilon = 1e-14);
            assert_relative_eq!(sb, 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn ruth4_has_four_stages_with_negative_substep() {
        let table = CoefficientTable::ruth4();
        assert_eq!(table.stages().len(), 4);
        assert!(table.stages()[2].b < 0.0);
        assert!(table.stages()[1].a < 0.0);
    }

    #[test]
    fn trajectory_has_steps_states() {
        let trajectory = ruth3(State::new(0.0, 1.0), TimeSpan::new(0.0, 10.0), 0.3, oscillator);
        assert_eq!(trajectory.len(), 33);
        assert_eq!(trajectory[0], State::new(0.0, 1.0));
    }

    #[test]
    fn clock_is_cumulative_across_steps() {
        let recorded = std::cell::RefCell::new(Vec::new());
        let acc = |_x: f64, _p: f64, t: f64| {
            recorded.borrow_mut().push(t);
            0.0
        };

        let _ = composed_leapfrog(State::default(), TimeSpan::new(1.0, 2.0), 0.25, acc);
        let times = recorded.into_inner();

        // 4 states, 3 steps; drift-kick-drift kicks at the half step
        assert_eq!(times.len(), 6);
        for (seen, expected) in times.iter().zip([1.0, 1.125, 1.25, 1.375, 1.5, 1.625]) {
            assert_abs_diff_eq!(*seen, expected, epsilon = 1e-15);
        }
    }

    #[test]
    fn conserves_oscillator_energy() {
        let initial = State::new(0.0, 1.0);
        let trajectory = ruth3(initial, TimeSpan::new(0.0, 100.0), 0.05, oscillator);

        let drift = trajectory
            .iter()
            .map(|state| (state.energy() - initial.energy()).abs())
            .fold(0.0, f64::max);
        assert!(drift < 1e-4, "energy drift {drift}");
    }

    #[test]
    fn integrator_matches_free_function() {
        let span = TimeSpan::new(0.0, 5.0);
        let initial = State::new(0.3, -0.2);
        let scheme = Composition::new(CoefficientTable::ruth4(), oscillator);

        let via_trait = scheme.integrate(initial, span, 0.1).expect("infallible");
        assert_eq!(via_trait, ruth4(initial, span, 0.1, oscillator));
    }
}

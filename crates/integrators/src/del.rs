//! Steppers derived from a discrete Lagrangian.
//!
//! Given a two-step discrete Lagrangian `L(x0, x1, z0, z1, h)`, where `z0`
//! and `z1` are auxiliary momentum-like symbols, the [`Generator`] derives
//! the discrete momentum balance at both ends of a step:
//!
//! ```text
//! p0 = −h·∂L/∂x0 / (1 + h·∂L/∂z0)
//! p1 =  h·∂L/∂x1 / (1 − h·∂L/∂z1)
//! ```
//!
//! A step from `(p, x)` finds `xnew` with `p0(x, xnew, h) = p`, then sets
//! `pnew = p1(x, xnew, h)`. In [`Mode::Implicit`] the first relation is solved
//! numerically on every step, seeded with the Euler predictor `x + h·p`. In
//! [`Mode::Explicit`] it is solved symbolically for `x1` once, at
//! construction.
//!
//! All symbolic work happens when the stepper is built. Failures there are
//! [`ConstructionError`]s and are reported before any state is produced; the
//! stepping path only ever fails with [`StepError`].

pub mod lagrangians;

use contiv_core::{Integrator, State, TimeSpan, Trajectory};
use contiv_solvers::RootFinder;
use contiv_symbolic::{Compiled, Expr, SolveError, Symbol, solve_linear};

use crate::{ConstructionError, StepError};

/// A two-step discrete Lagrangian `L(x0, x1, z0, z1, h)`.
///
/// Any `Fn(&Expr, &Expr, &Expr, &Expr, &Expr) -> Expr` closure is a discrete
/// Lagrangian. It is evaluated once, on symbols, when a [`Generator`] is
/// built.
pub trait DiscreteLagrangian {
    fn lagrangian(&self, x0: &Expr, x1: &Expr, z0: &Expr, z1: &Expr, h: &Expr) -> Expr;
}

impl<F> DiscreteLagrangian for F
where
    F: Fn(&Expr, &Expr, &Expr, &Expr, &Expr) -> Expr,
{
    fn lagrangian(&self, x0: &Expr, x1: &Expr, z0: &Expr, z1: &Expr, h: &Expr) -> Expr {
        self(x0, x1, z0, z1, h)
    }
}

/// How a generated stepper finds the next position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Solve `p0(x, xnew, h) = p` numerically on every step.
    Implicit(RootFinder),
    /// Solve `p0 = p` for `x1` symbolically once and reuse the formula.
    Explicit,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Implicit(RootFinder::default())
    }
}

/// The symbols a discrete Lagrangian is written in.
#[derive(Debug, Clone)]
struct Symbols {
    x0: Symbol,
    x1: Symbol,
    z0: Symbol,
    z1: Symbol,
    h: Symbol,
    p: Symbol,
}

impl Symbols {
    fn new() -> Self {
        Self {
            x0: Symbol::new("x0"),
            x1: Symbol::new("x1"),
            z0: Symbol::new("z0"),
            z1: Symbol::new("z1"),
            h: Symbol::new("h"),
            p: Symbol::new("p"),
        }
    }
}

/// The discrete momentum relations derived from a Lagrangian.
#[derive(Debug, Clone)]
pub struct Generator {
    symbols: Symbols,
    p0: Expr,
    p1: Expr,
}

impl Generator {
    /// Differentiates the Lagrangian and forms the momentum relations.
    #[must_use]
    pub fn new(lagrangian: &impl DiscreteLagrangian) -> Self {
        let symbols = Symbols::new();
        let [x0, x1, z0, z1, h] = [&symbols.x0, &symbols.x1, &symbols.z0, &symbols.z1, &symbols.h]
            .map(Expr::from);

        let l = lagrangian.lagrangian(&x0, &x1, &z0, &z1, &h);

        let p0 = -(&h * l.diff(&symbols.x0)) / (1.0 + &h * l.diff(&symbols.z0));
        let p1 = (&h * l.diff(&symbols.x1)) / (1.0 - &h * l.diff(&symbols.z1));

        log::debug!("derived discrete momenta: p0 = {p0}, p1 = {p1}");

        Self { symbols, p0, p1 }
    }

    /// The start momentum relation `p0(x0, x1, h)`.
    #[must_use]
    pub fn p0(&self) -> &Expr {
        &self.p0
    }

    /// The end momentum relation `p1(x0, x1, h)`.
    #[must_use]
    pub fn p1(&self) -> &Expr {
        &self.p1
    }

    /// Builds a stepper from the derived relations.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] if a relation still mentions `z0`,
    /// `z1`, or any symbol other than `x0`, `x1`, `h`, if `p0` does not
    /// depend on `x1` (in either mode), or if the explicit update cannot be
    /// isolated.
    pub fn stepper(&self, mode: Mode) -> Result<DelStepper, ConstructionError> {
        let s = &self.symbols;
        let relation = [&s.x0, &s.x1, &s.h];

        let p1 = Compiled::new(&self.p1, relation).map_err(|source| {
            ConstructionError::Unevaluable {
                relation: "p1",
                source,
            }
        })?;

        let update = match mode {
            Mode::Implicit(finder) => {
                if !self.p0.contains(&s.x1) {
                    return Err(ConstructionError::Unsolvable(SolveError::NoSolution {
                        symbol: s.x1.name().to_owned(),
                    }));
                }
                let p0 = Compiled::new(&self.p0, relation).map_err(|source| {
                    ConstructionError::Unevaluable {
                        relation: "p0",
                        source,
                    }
                })?;
                Update::Implicit { p0, finder }
            }
            Mode::Explicit => {
                let balance = &self.p0 - Expr::from(&s.p);
                let x1 = solve_linear(&balance, &s.x1).map_err(ConstructionError::Unsolvable)?;
                log::debug!("explicit update: x1 = {x1}");

                let x1 = Compiled::new(&x1, [&s.x0, &s.p, &s.h]).map_err(|source| {
                    ConstructionError::Unevaluable {
                        relation: "x1",
                        source,
                    }
                })?;
                Update::Explicit { x1 }
            }
        };

        Ok(DelStepper { update, p1 })
    }
}

/// Builds a stepper from a discrete Lagrangian in one call.
///
/// # Errors
///
/// See [`Generator::stepper`].
pub fn del(
    lagrangian: &impl DiscreteLagrangian,
    mode: Mode,
) -> Result<DelStepper, ConstructionError> {
    Generator::new(lagrangian).stepper(mode)
}

#[derive(Debug, Clone)]
enum Update {
    Implicit { p0: Compiled<3>, finder: RootFinder },
    Explicit { x1: Compiled<3> },
}

/// A stepper generated from a discrete Lagrangian.
///
/// Holds only compiled numeric evaluators; the symbolic relations stay with
/// the [`Generator`].
#[derive(Debug, Clone)]
pub struct DelStepper {
    update: Update,
    p1: Compiled<3>,
}

impl DelStepper {
    /// Returns `true` if each step performs a root solve.
    #[must_use]
    pub fn is_implicit(&self) -> bool {
        matches!(self.update, Update::Implicit { .. })
    }

    fn step(&self, index: usize, time: f64, State { p, x }: State, h: f64) -> Result<State, StepError> {
        let x_new = match &self.update {
            Update::Explicit { x1 } => x1.eval([x, p, h]),
            Update::Implicit { p0, finder } => {
                let residual = |x_new: f64| p0.eval([x, x_new, h]) - p;
                finder
                    .find(&residual, x + h * p)
                    .map_err(|source| StepError::RootNotConverged {
                        step: index,
                        time,
                        source,
                    })?
            }
        };

        Ok(State::new(self.p1.eval([x, x_new, h]), x_new))
    }
}

impl Integrator for DelStepper {
    type Error = StepError;

    fn integrate(&self, initial: State, span: TimeSpan, h: f64) -> Result<Trajectory, StepError> {
        Trajectory::generate(initial, span.steps(h), |i, state| {
            self.step(i, span.time_at(i, h), state, h)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use contiv_symbolic::CompileError;

    use crate::{contact, leapfrog};

    #[test]
    fn harmonic_relations_match_leapfrog_by_hand() {
        let generator = Generator::new(&lagrangians::harmonic);
        let s = &generator.symbols;

        let p0 = Compiled::new(generator.p0(), [&s.x0, &s.x1, &s.h]).expect("bound");
        let p1 = Compiled::new(generator.p1(), [&s.x0, &s.x1, &s.h]).expect("bound");

        let (x0, x1, h) = (0.3, 0.5, 0.1);
        assert_relative_eq!(p0.eval([x0, x1, h]), (x1 - x0) / h + h * x0 / 2.0, epsilon = 1e-12);
        assert_relative_eq!(p1.eval([x0, x1, h]), (x1 - x0) / h - h * x1 / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn explicit_harmonic_is_leapfrog() {
        let stepper = del(&lagrangians::harmonic, Mode::Explicit).expect("linear in x1");
        assert!(!stepper.is_implicit());

        let span = TimeSpan::new(0.0, 20.0);
        let initial = State::new(0.5, 1.0);
        let generated = stepper.integrate(initial, span, 0.1).expect("explicit never fails");
        let reference = leapfrog::leapfrog(initial, span, 0.1, |x: f64, _p: f64, _t: f64| -x);

        assert!(generated.max_deviation(&reference) < 1e-10);
    }

    #[test]
    fn explicit_contact_is_first_order_contact() {
        let a = 0.25;
        let stepper = del(&lagrangians::contact(a), Mode::Explicit).expect("linear in x1");

        let span = TimeSpan::new(0.0, 10.0);
        let initial = State::new(0.0, 1.0);
        let generated = stepper.integrate(initial, span, 0.05).expect("explicit never fails");
        let reference = contact::contact(
            initial,
            span,
            0.05,
            a,
            contiv_core::LinearRestoring,
            contiv_core::NoForcing,
        );

        assert!(generated.max_deviation(&reference) < 1e-10);
    }

    #[test]
    fn implicit_mode_uses_root_finder() {
        let stepper = del(&lagrangians::harmonic, Mode::default()).expect("evaluable");
        assert!(stepper.is_implicit());

        let next = stepper
            .integrate(State::new(1.0, 0.0), TimeSpan::new(0.0, 0.25), 0.1)
            .expect("converges")[1];
        assert_relative_eq!(next.x, 0.1, epsilon = 1e-9);
    }

    #[test]
    fn leftover_auxiliary_symbol_is_a_construction_error() {
        // ∂L/∂x1 keeps a z1 factor, so p1 cannot be evaluated
        let lagrangian = |x0: &Expr, x1: &Expr, _z0: &Expr, z1: &Expr, h: &Expr| {
            z1 * (x1 - x0) / h
        };

        let result = del(&lagrangian, Mode::Explicit);
        assert!(matches!(
            result,
            Err(ConstructionError::Unevaluable {
                relation: "p1",
                source: CompileError::UnboundSymbol { .. },
            })
        ));
    }

    #[test]
    fn quadratic_momentum_has_no_unique_update() {
        let lagrangian = |x0: &Expr, x1: &Expr, _z0: &Expr, _z1: &Expr, h: &Expr| {
            ((x1 - x0) / h).powi(3) / 3.0
        };

        let result = del(&lagrangian, Mode::Explicit);
        assert!(matches!(
            result,
            Err(ConstructionError::Unsolvable(SolveError::NotUnique { degree: 2, .. }))
        ));
    }

    #[test]
    fn momentum_free_of_x1_has_no_update() {
        let lagrangian =
            |x0: &Expr, _x1: &Expr, _z0: &Expr, _z1: &Expr, _h: &Expr| x0.clone().powi(2);

        let result = del(&lagrangian, Mode::Explicit);
        assert!(matches!(
            result,
            Err(ConstructionError::Unsolvable(SolveError::NoSolution { .. }))
        ));
    }

    #[test]
    fn implicit_mode_rejects_momentum_free_of_x1_before_stepping() {
        let lagrangian =
            |x0: &Expr, _x1: &Expr, _z0: &Expr, _z1: &Expr, _h: &Expr| x0.clone().powi(2);

        let result = del(&lagrangian, Mode::default());
        assert!(matches!(
            result,
            Err(ConstructionError::Unsolvable(SolveError::NoSolution { ref symbol })) if symbol == "x1"
        ));
    }
}

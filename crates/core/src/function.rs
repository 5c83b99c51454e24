//! Problem-specific closures consumed by the schemes.
//!
//! Each trait is a single-method evaluation contract. Closures with the
//! matching signature implement the trait automatically, so callers usually
//! pass a lambda. Implementations must be deterministic and free of side
//! effects: schemes call them several times per step and may be run
//! concurrently by an outer caller.

/// An acceleration `acc(x, p, t)`.
pub trait Acceleration {
    /// Evaluates the acceleration at position `x`, momentum `p`, and time `t`.
    fn acceleration(&self, x: f64, p: f64, t: f64) -> f64;
}

impl<F> Acceleration for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn acceleration(&self, x: f64, p: f64, t: f64) -> f64 {
        self(x, p, t)
    }
}

/// An additive external force `f(t)`.
pub trait Forcing {
    /// Evaluates the force at time `t`.
    fn force(&self, t: f64) -> f64;
}

impl<F> Forcing for F
where
    F: Fn(f64) -> f64,
{
    fn force(&self, t: f64) -> f64 {
        self(t)
    }
}

/// The position-dependent restoring term `V'(x)` of the contact schemes.
///
/// The contact schemes subtract this term, so the unit harmonic oscillator
/// uses the identity ([`LinearRestoring`]).
pub trait Restoring {
    /// Evaluates the restoring term at position `x`.
    fn restoring(&self, x: f64) -> f64;
}

/// Restoring term `V'(x) = x` of the unit harmonic oscillator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearRestoring;

impl Restoring for LinearRestoring {
    fn restoring(&self, x: f64) -> f64 {
        x
    }
}

/// The zero forcing `f(t) = 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoForcing;

impl Forcing for NoForcing {
    fn force(&self, _t: f64) -> f64 {
        0.0
    }
}

/// Wraps a closure `Fn(f64) -> f64` as a restoring term.
///
/// `Forcing` already claims the blanket impl for single-argument closures, so
/// restoring closures are wrapped explicitly.
#[derive(Debug, Clone, Copy)]
pub struct RestoringFn<F>(pub F);

impl<F> Restoring for RestoringFn<F>
where
    F: Fn(f64) -> f64,
{
    fn restoring(&self, x: f64) -> f64 {
        (self.0)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn closures_are_accelerations() {
        let damping = 0.5;
        let acc = move |x: f64, p: f64, _t: f64| -x - damping * p;
        assert_relative_eq!(acc.acceleration(1.0, 2.0, 0.0), -2.0);
    }

    #[test]
    fn closures_are_forcings() {
        let forcing = |t: f64| 2.0 * t;
        assert_relative_eq!(forcing.force(1.5), 3.0);
        assert_relative_eq!(NoForcing.force(1.5), 0.0);
    }

    #[test]
    fn restoring_terms() {
        assert_relative_eq!(LinearRestoring.restoring(-3.0), -3.0);
        assert_relative_eq!(RestoringFn(|x: f64| x * x * x).restoring(2.0), 8.0);
    }
}

//! Contact-variational schemes for the linearly damped, forced oscillator.
//!
//! The damping `a` is folded directly into closed-form updates, so every step
//! is a handful of multiplications with no iteration. Each scheme takes a
//! restoring term `V'(x)` (identity by default, which bakes in the unit
//! oscillator) and an additive forcing `f(t)` (zero by default), evaluated at
//! the grid times `t0 + i·h` and `t0 + (i + 1)·h`.
//!
//! The denominators `1 + h·a/2` and `1 + h²/4` are never checked. A
//! parameter choice that zeroes one produces non-finite states.

use std::convert::Infallible;

use contiv_core::{
    Forcing, Integrator, LinearRestoring, NoForcing, Restoring, RestoringFn, State, TimeSpan,
    Trajectory,
};

/// First-order contact integrator.
///
/// ```text
/// xnew = x + (h − h²a)·p − h²/2·V'(x) + h²/2·f(tᵢ)
/// pnew = (1 − ha)·p + h/2·(f(tᵢ) + f(tᵢ₊₁) − V'(x) − V'(xnew))
/// ```
#[must_use]
pub fn contact(
    initial: State,
    span: TimeSpan,
    h: f64,
    damping: f64,
    restoring: impl Restoring,
    forcing: impl Forcing,
) -> Trajectory {
    let a = damping;
    let hsq = h * h;
    Trajectory::unfold(initial, span.steps(h), |i, State { p, x }| {
        let f0 = forcing.force(span.time_at(i, h));
        let f1 = forcing.force(span.time_at(i + 1, h));
        let v0 = restoring.restoring(x);

        let x_new = x + (h - hsq * a) * p - hsq / 2.0 * v0 + hsq / 2.0 * f0;
        let p_new = (1.0 - h * a) * p + h / 2.0 * (f0 + f1 - v0 - restoring.restoring(x_new));
        State::new(p_new, x_new)
    })
}

/// Second-order symmetric contact integrator.
///
/// Half-strength damping on both ends of the step:
///
/// ```text
/// xnew = x + (h − h²a/2)·p − h²/2·V'(x) + h²/2·f(tᵢ)
/// pnew = ((1 − ha/2)·p + h/2·(f(tᵢ) + f(tᵢ₊₁) − V'(x) − V'(xnew))) / (1 + ha/2)
/// ```
#[must_use]
pub fn symcontact(
    initial: State,
    span: TimeSpan,
    h: f64,
    damping: f64,
    restoring: impl Restoring,
    forcing: impl Forcing,
) -> Trajectory {
    let half_a = damping / 2.0;
    let hsq = h * h;
    Trajectory::unfold(initial, span.steps(h), |i, State { p, x }| {
        let f0 = forcing.force(span.time_at(i, h));
        let f1 = forcing.force(span.time_at(i + 1, h));
        let v0 = restoring.restoring(x);

        let x_new = x + (h - hsq * half_a) * p - hsq / 2.0 * v0 + hsq / 2.0 * f0;
        let balance = h / 2.0 * (f0 + f1 - v0 - restoring.restoring(x_new));
        let p_new = ((1.0 - h * half_a) * p + balance) / (1.0 + h * half_a);
        State::new(p_new, x_new)
    })
}

/// First-order midpoint contact integrator.
///
/// The restoring force is sampled at the midpoint `(x + xnew)/2`, which keeps
/// the update closed-form only for the linear restoring term, so this scheme
/// has no restoring parameter. With `a = 0` and no forcing it is the implicit
/// midpoint rule for the unit oscillator.
///
/// ```text
/// xnew = ((h − h²a)·p + (1 − h²/4)·x + h²/2·f(tᵢ)) / (1 + h²/4)
/// pnew = (xnew − x)/h − h/4·(x + xnew) + h/2·f(tᵢ₊₁)
/// ```
#[must_use]
pub fn midpoint(
    initial: State,
    span: TimeSpan,
    h: f64,
    damping: f64,
    forcing: impl Forcing,
) -> Trajectory {
    let a = damping;
    let hsq = h * h;
    let denominator = 1.0 + hsq / 4.0;
    Trajectory::unfold(initial, span.steps(h), |i, State { p, x }| {
        let f0 = forcing.force(span.time_at(i, h));
        let f1 = forcing.force(span.time_at(i + 1, h));

        let x_new = ((h - hsq * a) * p + (1.0 - hsq / 4.0) * x + hsq / 2.0 * f0) / denominator;
        let p_new = (x_new - x) / h - h / 4.0 * (x + x_new) + h / 2.0 * f1;
        State::new(p_new, x_new)
    })
}

/// Accuracy order of a [`Contact`] scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOrder {
    /// [`contact`]
    First,
    /// [`symcontact`]
    Second,
}

/// A contact scheme with its damping, restoring term, and forcing.
///
/// Start from [`Contact::first_order`] or [`Contact::second_order`] and
/// replace the defaults with [`with_restoring`](Self::with_restoring) and
/// [`with_forcing`](Self::with_forcing).
#[derive(Debug, Clone, Copy)]
pub struct Contact<R = LinearRestoring, F = NoForcing> {
    order: ContactOrder,
    damping: f64,
    restoring: R,
    forcing: F,
}

impl Contact {
    /// The first-order [`contact`] scheme with linear restoring and no forcing.
    #[must_use]
    pub fn first_order(damping: f64) -> Self {
        Self::with_order(ContactOrder::First, damping)
    }

    /// The second-order [`symcontact`] scheme with linear restoring and no forcing.
    #[must_use]
    pub fn second_order(damping: f64) -> Self {
        Self::with_order(ContactOrder::Second, damping)
    }

    fn with_order(order: ContactOrder, damping: f64) -> Self {
        Self {
            order,
            damping,
            restoring: LinearRestoring,
            forcing: NoForcing,
        }
    }
}

impl<R, F> Contact<R, F> {
    /// Replaces the restoring term `V'(x)`.
    #[must_use]
    pub fn with_restoring<R2: Restoring>(self, restoring: R2) -> Contact<R2, F> {
        Contact {
            order: self.order,
            damping: self.damping,
            restoring,
            forcing: self.forcing,
        }
    }

    /// Replaces the forcing `f(t)`.
    #[must_use]
    pub fn with_forcing<F2: Forcing>(self, forcing: F2) -> Contact<R, F2> {
        Contact {
            order: self.order,
            damping: self.damping,
            restoring: self.restoring,
            forcing,
        }
    }

    /// Which contact scheme this value runs.
    #[must_use]
    pub fn order(&self) -> ContactOrder {
        self.order
    }

    /// Damping factor `a`.
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }
}

impl<R: Restoring, F: Forcing> Integrator for Contact<R, F> {
    type Error = Infallible;

    fn integrate(&self, initial: State, span: TimeSpan, h: f64) -> Result<Trajectory, Infallible> {
        let restoring = RestoringFn(|x: f64| self.restoring.restoring(x));
        let forcing = |t: f64| self.forcing.force(t);
        Ok(match self.order {
            ContactOrder::First => contact(initial, span, h, self.damping, restoring, forcing),
            ContactOrder::Second => symcontact(initial, span, h, self.damping, restoring, forcing),
        })
    }
}

/// The midpoint contact scheme as an [`Integrator`].
#[derive(Debug, Clone, Copy)]
pub struct MidpointContact<F = NoForcing> {
    pub damping: f64,
    pub forcing: F,
}

impl MidpointContact {
    /// Unforced midpoint contact with damping `a`.
    #[must_use]
    pub fn new(damping: f64) -> Self {
        Self {
            damping,
            forcing: NoForcing,
        }
    }
}

impl<F: Forcing> Integrator for MidpointContact<F> {
    type Error = Infallible;

    fn integrate(&self, initial: State, span: TimeSpan, h: f64) -> Result<Trajectory, Infallible> {
        let forcing = |t: f64| self.forcing.force(t);
        Ok(midpoint(initial, span, h, self.damping, forcing))
    }
}

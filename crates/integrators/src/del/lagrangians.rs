//! Discrete Lagrangians of the unit oscillator.
//!
//! With `v = (x1 − x0)/h`, each Lagrangian below generates one of the
//! hand-written schemes of this crate through [`del`](super::del):
//!
//! | Lagrangian | Scheme |
//! |---|---|
//! | [`harmonic`] | explicit leapfrog |
//! | [`contact`] | first-order contact |
//! | [`symmetric_contact`] | second-order symmetric contact |
//! | [`midpoint_contact`] | midpoint contact |

use contiv_symbolic::Expr;

/// `½v² − (x0² + x1²)/4`, the trapezoidal oscillator Lagrangian.
#[must_use]
pub fn harmonic(x0: &Expr, x1: &Expr, _z0: &Expr, _z1: &Expr, h: &Expr) -> Expr {
    let v = (x1 - x0) / h;
    0.5 * v.powi(2) - (x0.clone().powi(2) + x1.clone().powi(2)) / 4.0
}

/// [`harmonic`] with the first-order contact damping `−a·z0`.
pub fn contact(damping: f64) -> impl Fn(&Expr, &Expr, &Expr, &Expr, &Expr) -> Expr {
    move |x0: &Expr, x1: &Expr, z0: &Expr, z1: &Expr, h: &Expr| {
        harmonic(x0, x1, z0, z1, h) - damping * z0
    }
}

/// [`harmonic`] with the symmetric contact damping `−a·(z0 + z1)/2`.
pub fn symmetric_contact(damping: f64) -> impl Fn(&Expr, &Expr, &Expr, &Expr, &Expr) -> Expr {
    move |x0: &Expr, x1: &Expr, z0: &Expr, z1: &Expr, h: &Expr| {
        harmonic(x0, x1, z0, z1, h) - damping * (z0 + z1) / 2.0
    }
}

/// `½v² − ((x0 + x1)/2)²/2 − a·z0`, the potential sampled at the midpoint.
pub fn midpoint_contact(damping: f64) -> impl Fn(&Expr, &Expr, &Expr, &Expr, &Expr) -> Expr {
    move |x0: &Expr, x1: &Expr, z0: &Expr, _z1: &Expr, h: &Expr| {
        let v = (x1 - x0) / h;
        let mid = (x0 + x1) / 2.0;
        0.5 * v.powi(2) - 0.5 * mid.powi(2) - damping * z0
    }
}

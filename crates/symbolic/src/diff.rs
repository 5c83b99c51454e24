use crate::expr::{Expr, Func, Symbol};

impl Expr {
    /// Differentiates the expression with respect to `symbol`.
    ///
    /// The derivative is built with the simplifying constructors, so terms
    /// that do not depend on `symbol` drop out.
    #[must_use]
    pub fn diff(&self, symbol: &Symbol) -> Expr {
        match self {
            Self::Num(_) => Self::Num(0.0),
            Self::Sym(s) => Self::Num(if s == symbol { 1.0 } else { 0.0 }),
            Self::Add(a, b) => a.diff(symbol) + b.diff(symbol),
            Self::Neg(a) => -a.diff(symbol),
            Self::Mul(a, b) => a.diff(symbol) * b.as_ref() + a.as_ref() * b.diff(symbol),
            Self::Div(a, b) => {
                let da = a.diff(symbol);
                let db = b.diff(symbol);
                if db.is_zero() {
                    da / b.as_ref()
                } else {
                    (da * b.as_ref() - a.as_ref() * db) / b.as_ref().clone().powi(2)
                }
            }
            Self::Pow(a, n) => {
                f64::from(*n) * a.as_ref().clone().powi(n - 1) * a.diff(symbol)
            }
            Self::Apply(func, a) => {
                let outer = match func {
                    Func::Sin => a.as_ref().clone().cos(),
                    Func::Cos => -a.as_ref().clone().sin(),
                    Func::Exp => a.as_ref().clone().exp(),
                    Func::Ln => 1.0 / a.as_ref(),
                    Func::Sqrt => 0.5 / a.as_ref().clone().sqrt(),
                };
                outer * a.diff(symbol)
            }
        }
    }
}

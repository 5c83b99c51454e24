mod display;
mod ops;

use std::sync::Arc;

/// A named variable.
///
/// Symbols compare by name, so two `Symbol::new("x")` values are the same
/// symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a symbol. Symbols with equal names are the same symbol.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// The symbol's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Elementary functions of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Func {
    Sin,
    Cos,
    Exp,
    Ln,
    Sqrt,
}

impl Func {
    /// Applies the function to a number.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sin => value.sin(),
            Self::Cos => value.cos(),
            Self::Exp => value.exp(),
            Self::Ln => value.ln(),
            Self::Sqrt => value.sqrt(),
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
        }
    }
}

/// A symbolic expression.
///
/// Build expressions with [`Expr::from`], the arithmetic operators, and the
/// function methods ([`Expr::sin`], [`Expr::powi`], ...). Every constructor
/// simplifies as it goes: constants fold, and additive and multiplicative
/// identities disappear. Matching on the variants is fine; building them
/// directly skips simplification.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Sym(Symbol),
    Add(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    Pow(Box<Expr>, i32),
    Apply(Func, Box<Expr>),
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Self::Sym(symbol)
    }
}

impl From<&Symbol> for Expr {
    fn from(symbol: &Symbol) -> Self {
        Self::Sym(symbol.clone())
    }
}

impl Expr {
    /// Returns the constant value, if the expression is a number.
    #[must_use]
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns `true` if the expression is the constant zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_num() == Some(0.0)
    }

    fn is_one(&self) -> bool {
        self.as_num() == Some(1.0)
    }

    pub(crate) fn sum(lhs: Self, rhs: Self) -> Self {
        match (lhs, rhs) {
            (Self::Num(a), Self::Num(b)) => Self::Num(a + b),
            (lhs, rhs) if lhs.is_zero() => rhs,
            (lhs, rhs) if rhs.is_zero() => lhs,
            (lhs, Self::Neg(rhs)) if lhs == *rhs => Self::Num(0.0),
            (lhs, rhs) => Self::Add(Box::new(lhs), Box::new(rhs)),
        }
    }

    pub(crate) fn difference(lhs: Self, rhs: Self) -> Self {
        Self::sum(lhs, Self::negated(rhs))
    }

    pub(crate) fn negated(operand: Self) -> Self {
        match operand {
            Self::Num(a) => Self::Num(-a),
            Self::Neg(inner) => *inner,
            operand => Self::Neg(Box::new(operand)),
        }
    }

    pub(crate) fn product(lhs: Self, rhs: Self) -> Self {
        match (lhs, rhs) {
            (Self::Num(a), Self::Num(b)) => Self::Num(a * b),
            (lhs, rhs) if lhs.is_zero() || rhs.is_zero() => Self::Num(0.0),
            (lhs, rhs) if lhs.is_one() => rhs,
            (lhs, rhs) if rhs.is_one() => lhs,
            (Self::Num(a), rhs) if a == -1.0 => Self::negated(rhs),
            (lhs, Self::Num(b)) if b == -1.0 => Self::negated(lhs),
            // keep constants on the left
            (lhs, Self::Num(b)) => Self::Mul(Box::new(Self::Num(b)), Box::new(lhs)),
            (lhs, rhs) => Self::Mul(Box::new(lhs), Box::new(rhs)),
        }
    }

    pub(crate) fn quotient(lhs: Self, rhs: Self) -> Self {
        match (lhs, rhs) {
            (Self::Num(a), Self::Num(b)) => Self::Num(a / b),
            (lhs, rhs) if rhs.is_one() => lhs,
            (lhs, rhs) if lhs.is_zero() && rhs.as_num().is_none() => Self::Num(0.0),
            (lhs, rhs) => Self::Div(Box::new(lhs), Box::new(rhs)),
        }
    }

    /// Raises the expression to an integer power.
    #[must_use]
    pub fn powi(self, exponent: i32) -> Self {
        match (self, exponent) {
            (_, 0) => Self::Num(1.0),
            (base, 1) => base,
            (Self::Num(a), n) => Self::Num(a.powi(n)),
            (Self::Pow(base, m), n) => Self::Pow(base, m * n),
            (base, n) => Self::Pow(Box::new(base), n),
        }
    }

    /// Applies an elementary function, folding constant arguments.
    #[must_use]
    pub fn apply(self, func: Func) -> Self {
        match self {
            Self::Num(a) => Self::Num(func.apply(a)),
            arg => Self::Apply(func, Box::new(arg)),
        }
    }

    #[must_use]
    pub fn sin(self) -> Self {
        self.apply(Func::Sin)
    }

    #[must_use]
    pub fn cos(self) -> Self {
        self.apply(Func::Cos)
    }

    #[must_use]
    pub fn exp(self) -> Self {
        self.apply(Func::Exp)
    }

    #[must_use]
    pub fn ln(self) -> Self {
        self.apply(Func::Ln)
    }

    #[must_use]
    pub fn sqrt(self) -> Self {
        self.apply(Func::Sqrt)
    }

    /// Replaces every occurrence of `symbol` with `replacement`.
    ///
    /// The result is rebuilt through the simplifying constructors, so
    /// substituting a number folds whatever becomes constant.
    #[must_use]
    pub fn substitute(&self, symbol: &Symbol, replacement: &Self) -> Self {
        let sub = |e: &Self| e.substitute(symbol, replacement);
        match self {
            Self::Num(_) => self.clone(),
            Self::Sym(s) if s == symbol => replacement.clone(),
            Self::Sym(_) => self.clone(),
            Self::Add(a, b) => Self::sum(sub(a), sub(b)),
            Self::Mul(a, b) => Self::product(sub(a), sub(b)),
            Self::Div(a, b) => Self::quotient(sub(a), sub(b)),
            Self::Neg(a) => Self::negated(sub(a)),
            Self::Pow(a, n) => sub(a).powi(*n),
            Self::Apply(func, a) => sub(a).apply(*func),
        }
    }

    /// Returns `true` if `symbol` appears anywhere in the expression.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        match self {
            Self::Num(_) => false,
            Self::Sym(s) => s == symbol,
            Self::Add(a, b) | Self::Mul(a, b) | Self::Div(a, b) => {
                a.contains(symbol) || b.contains(symbol)
            }
            Self::Neg(a) | Self::Pow(a, _) | Self::Apply(_, a) => a.contains(symbol),
        }
    }

    /// Returns the distinct symbols of the expression, sorted by name.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        fn collect(expr: &Expr, out: &mut Vec<Symbol>) {
            match expr {
                Expr::Num(_) => {}
                Expr::Sym(s) => out.push(s.clone()),
                Expr::Add(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) => {
                    collect(a, out);
                    collect(b, out);
                }
                Expr::Neg(a) | Expr::Pow(a, _) | Expr::Apply(_, a) => collect(a, out),
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out.sort();
        out.dedup();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Expr {
        Expr::from(Symbol::new("x"))
    }

    #[test]
    fn constants_fold() {
        assert_eq!(Expr::from(2.0) + 3.0, Expr::Num(5.0));
        assert_eq!(Expr::from(2.0) * Expr::from(4.0) / 8.0, Expr::Num(1.0));
        assert_eq!(Expr::from(0.0).cos(), Expr::Num(1.0));
        assert_eq!(Expr::from(3.0).powi(2), Expr::Num(9.0));
    }

    #[test]
    fn identities_vanish() {
        assert_eq!(x() + 0.0, x());
        assert_eq!(0.0 + x(), x());
        assert_eq!(x() * 1.0, x());
        assert_eq!(x() * 0.0, Expr::Num(0.0));
        assert_eq!(x() / 1.0, x());
        assert_eq!(-(-x()), x());
        assert_eq!(x() - x(), Expr::Num(0.0));
        assert_eq!(x().powi(1), x());
        assert_eq!(x().powi(0), Expr::Num(1.0));
    }

    #[test]
    fn constants_move_left() {
        assert_eq!(x() * 2.0, 2.0 * x());
    }

    #[test]
    fn substitution_folds() {
        let x_sym = Symbol::new("x");
        let expr = (x() + 1.0) * x();
        assert_eq!(expr.substitute(&x_sym, &Expr::from(2.0)), Expr::Num(6.0));
        assert_eq!(expr.substitute(&x_sym, &Expr::from(0.0)), Expr::Num(0.0));
    }

    #[test]
    fn lists_symbols() {
        let a = Symbol::new("a");
        let b = Symbol::new("b");
        let expr = Expr::from(&b) * Expr::from(&a) + Expr::from(&b).sin();

        assert_eq!(expr.symbols(), vec![a.clone(), b]);
        assert!(expr.contains(&a));
        assert!(!expr.contains(&Symbol::new("c")));
    }
}

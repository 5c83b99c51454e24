use crate::expr::{Expr, Symbol};

impl Expr {
    /// Returns the polynomial degree of the expression in `symbol`.
    ///
    /// Returns `None` if the expression is not a polynomial in `symbol`,
    /// i.e. the symbol appears in a denominator, under a negative power, or
    /// inside an elementary function. Coefficients may be arbitrary
    /// expressions in the other symbols.
    ///
    /// The degree is structural: `x·x − x·x` reports degree 2 even though it
    /// simplifies to zero elsewhere.
    #[must_use]
    pub fn degree(&self, symbol: &Symbol) -> Option<u32> {
        match self {
            Self::Num(_) => Some(0),
            Self::Sym(s) => Some(u32::from(s == symbol)),
            Self::Add(a, b) => Some(a.degree(symbol)?.max(b.degree(symbol)?)),
            Self::Mul(a, b) => Some(a.degree(symbol)? + b.degree(symbol)?),
            Self::Neg(a) => a.degree(symbol),
            Self::Div(a, b) => {
                if b.contains(symbol) {
                    None
                } else {
                    a.degree(symbol)
                }
            }
            Self::Pow(a, n) => {
                let base = a.degree(symbol)?;
                match u32::try_from(*n) {
                    Ok(n) => Some(base * n),
                    Err(_) if base == 0 => Some(0),
                    Err(_) => None,
                }
            }
            Self::Apply(_, a) => {
                if a.contains(symbol) {
                    None
                } else {
                    Some(0)
                }
            }
        }
    }
}

use std::fmt;

use super::{Expr, Symbol};

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Expr {
    /// Binding strength, used to decide where parentheses go.
    fn precedence(&self) -> u8 {
        match self {
            Self::Add(..) => 1,
            Self::Mul(..) | Self::Div(..) => 2,
            Self::Neg(_) => 3,
            Self::Pow(..) => 4,
            Self::Num(value) if *value < 0.0 => 3,
            Self::Num(_) | Self::Sym(_) | Self::Apply(..) => 5,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        if self.precedence() < min {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(value) => write!(f, "{value}"),
            Self::Sym(symbol) => write!(f, "{symbol}"),
            Self::Add(a, b) => {
                a.fmt_operand(f, 1)?;
                if let Self::Neg(inner) = b.as_ref() {
                    f.write_str(" - ")?;
                    inner.fmt_operand(f, 2)
                } else {
                    f.write_str(" + ")?;
                    b.fmt_operand(f, 1)
                }
            }
            Self::Mul(a, b) => {
                a.fmt_operand(f, 2)?;
                f.write_str("*")?;
                b.fmt_operand(f, 3)
            }
            Self::Div(a, b) => {
                a.fmt_operand(f, 2)?;
                f.write_str("/")?;
                b.fmt_operand(f, 4)
            }
            Self::Neg(a) => {
                f.write_str("-")?;
                a.fmt_operand(f, 4)
            }
            Self::Pow(a, n) => {
                a.fmt_operand(f, 5)?;
                write!(f, "^{n}")
            }
            Self::Apply(func, a) => write!(f, "{}({a})", func.name()),
        }
    }
}

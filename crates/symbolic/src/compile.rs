use crate::{
    error::CompileError,
    expr::{Expr, Func, Symbol},
};

/// An expression resolved against a fixed, ordered list of `N` symbols.
///
/// Compiling replaces each symbol with its position in the argument list, so
/// evaluation is a plain tree walk over numbers. Every symbol the expression
/// mentions must be in the list; extra arguments are allowed and ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled<const N: usize> {
    root: Node,
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Const(f64),
    Arg(usize),
    Add(Box<Node>, Box<Node>),
    Mul(Box<Node>, Box<Node>),
    Div(Box<Node>, Box<Node>),
    Neg(Box<Node>),
    Pow(Box<Node>, i32),
    Apply(Func, Box<Node>),
}

impl<const N: usize> Compiled<N> {
    /// Compiles `expr` with argument `i` bound to `symbols[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::UnboundSymbol`] if the expression mentions a
    /// symbol that is not in `symbols`.
    pub fn new(expr: &Expr, symbols: [&Symbol; N]) -> Result<Self, CompileError> {
        Ok(Self {
            root: lower(expr, &symbols)?,
        })
    }

    /// Evaluates the expression with argument `i` set to `args[i]`.
    #[must_use]
    pub fn eval(&self, args: [f64; N]) -> f64 {
        self.root.eval(&args)
    }
}

fn lower(expr: &Expr, symbols: &[&Symbol]) -> Result<Node, CompileError> {
    let boxed = |e: &Expr| lower(e, symbols).map(Box::new);

    Ok(match expr {
        Expr::Num(value) => Node::Const(*value),
        Expr::Sym(symbol) => {
            let index = symbols.iter().position(|s| *s == symbol).ok_or_else(|| {
                CompileError::UnboundSymbol {
                    name: symbol.name().to_owned(),
                }
            })?;
            Node::Arg(index)
        }
        Expr::Add(a, b) => Node::Add(boxed(a)?, boxed(b)?),
        Expr::Mul(a, b) => Node::Mul(boxed(a)?, boxed(b)?),
        Expr::Div(a, b) => Node::Div(boxed(a)?, boxed(b)?),
        Expr::Neg(a) => Node::Neg(boxed(a)?),
        Expr::Pow(a, n) => Node::Pow(boxed(a)?, *n),
        Expr::Apply(func, a) => Node::Apply(*func, boxed(a)?),
    })
}

impl Node {
    fn eval(&self, args: &[f64]) -> f64 {
        match self {
            Self::Const(value) => *value,
            Self::Arg(index) => args[*index],
            Self::Add(a, b) => a.eval(args) + b.eval(args),
            Self::Mul(a, b) => a.eval(args) * b.eval(args),
            Self::Div(a, b) => a.eval(args) / b.eval(args),
            Self::Neg(a) => -a.eval(args),
            Self::Pow(a, n) => a.eval(args).powi(*n),
            Self::Apply(func, a) => func.apply(a.eval(args)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn evaluates_in_argument_order() {
        let x = Symbol::new("x");
        let y = Symbol::new("y");
        let expr = Expr::from(&x) / Expr::from(&y);

        let xy = Compiled::new(&expr, [&x, &y]).expect("bound");
        let yx = Compiled::new(&expr, [&y, &x]).expect("bound");

        assert_relative_eq!(xy.eval([1.0, 4.0]), 0.25);
        assert_relative_eq!(yx.eval([1.0, 4.0]), 4.0);
    }

    #[test]
    fn ignores_unused_arguments() {
        let x = Symbol::new("x");
        let unused = Symbol::new("unused");
        let expr = (Expr::from(&x) * 2.0).cos();

        let eval = Compiled::new(&expr, [&unused, &x]).expect("bound");
        assert_relative_eq!(eval.eval([99.0, 0.5]), 1.0_f64.cos());
    }

    #[test]
    fn constant_needs_no_arguments() {
        let eval = Compiled::new(&Expr::from(2.5), []).expect("constant");
        assert_relative_eq!(eval.eval([]), 2.5);
    }

    #[test]
    fn reports_unbound_symbol() {
        let x = Symbol::new("x");
        let z0 = Symbol::new("z0");
        let expr = Expr::from(&x) + Expr::from(&z0);

        assert_eq!(
            Compiled::new(&expr, [&x]),
            Err(CompileError::UnboundSymbol { name: "z0".into() })
        );
    }
}

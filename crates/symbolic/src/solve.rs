use crate::{
    error::SolveError,
    expr::{Expr, Symbol},
};

/// Solves `relation = 0` for a symbol that appears linearly.
///
/// Writing the relation as `c1·s + c0`, where neither coefficient contains
/// `s`, the solution is `−c0 / c1`. The coefficients may contain any other
/// symbol, so the result is a closed-form update in those symbols.
///
/// # Errors
///
/// Returns an error if the relation does not depend on `symbol`, is a
/// polynomial of higher degree in it, or is not polynomial in it at all.
pub fn solve_linear(relation: &Expr, symbol: &Symbol) -> Result<Expr, SolveError> {
    let name = || symbol.name().to_owned();

    match relation.degree(symbol) {
        None => return Err(SolveError::NonPolynomial { symbol: name() }),
        Some(0) => return Err(SolveError::NoSolution { symbol: name() }),
        Some(1) => {}
        Some(degree) => {
            return Err(SolveError::NotUnique {
                symbol: name(),
                degree,
            });
        }
    }

    let slope = relation.diff(symbol);
    if slope.is_zero() {
        return Err(SolveError::NoSolution { symbol: name() });
    }
    let intercept = relation.substitute(symbol, &Expr::Num(0.0));

    Ok(-intercept / slope)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::Compiled;

    #[test]
    fn isolates_linear_symbol() {
        let x = Symbol::new("x");
        let a = Symbol::new("a");
        let b = Symbol::new("b");
        let (ex, ea, eb) = (Expr::from(&x), Expr::from(&a), Expr::from(&b));

        // a·(x − 1)/b + 3 = 0  =>  x = 1 − 3b/a
        let relation = &ea * (&ex - 1.0) / &eb + 3.0;
        let solved = solve_linear(&relation, &x).expect("linear in x");

        assert!(!solved.contains(&x));
        let eval = Compiled::new(&solved, [&a, &b]).expect("bound");
        assert_relative_eq!(eval.eval([2.0, 4.0]), 1.0 - 6.0, epsilon = 1e-14);
    }

    #[test]
    fn rejects_missing_symbol() {
        let x = Symbol::new("x");
        let relation = Expr::from(Symbol::new("y")) + 1.0;
        assert_eq!(
            solve_linear(&relation, &x),
            Err(SolveError::NoSolution { symbol: "x".into() })
        );
    }

    #[test]
    fn rejects_cancelled_symbol() {
        let x = Symbol::new("x");
        let ex = Expr::from(&x);
        let relation = Expr::Add(Box::new(ex.clone()), Box::new(-1.0 * &ex));
        assert!(matches!(
            solve_linear(&relation, &x),
            Err(SolveError::NoSolution { .. })
        ));
    }

    #[test]
    fn rejects_quadratic() {
        let x = Symbol::new("x");
        let ex = Expr::from(&x);
        assert_eq!(
            solve_linear(&(ex.clone().powi(2) - 4.0), &x),
            Err(SolveError::NotUnique {
                symbol: "x".into(),
                degree: 2,
            })
        );
    }

    #[test]
    fn rejects_non_polynomial() {
        let x = Symbol::new("x");
        let relation = Expr::from(&x).sin();
        assert_eq!(
            solve_linear(&relation, &x),
            Err(SolveError::NonPolynomial { symbol: "x".into() })
        );
    }
}

//! Symbolic expressions for deriving discrete Euler–Lagrange steppers.
//!
//! This crate is deliberately small. It covers what a two-step discrete
//! Lagrangian needs on its way to a numeric update:
//!
//! - [`Expr`] trees over [`Symbol`]s and `f64` constants, with simplifying
//!   constructors and operator overloading
//! - [`Expr::diff`] for symbolic differentiation and [`Expr::substitute`]
//! - [`Expr::degree`] and [`solve_linear`] for isolating a symbol that
//!   appears linearly
//! - [`Compiled`] for evaluating an expression against a fixed list of
//!   symbols
//!
//! # Example
//!
//! ```
//! use contiv_symbolic::{Compiled, Expr, Symbol, solve_linear};
//!
//! let x = Symbol::new("x");
//! let y = Symbol::new("y");
//!
//! // 2x + y = 0  =>  x = -y / 2
//! let relation = 2.0 * Expr::from(&x) + Expr::from(&y);
//! let solved = solve_linear(&relation, &x).unwrap();
//!
//! let eval = Compiled::new(&solved, [&y]).unwrap();
//! assert_eq!(eval.eval([4.0]), -2.0);
//! ```

mod compile;
mod degree;
mod diff;
mod error;
mod expr;
mod solve;

pub use compile::Compiled;
pub use error::{CompileError, SolveError};
pub use expr::{Expr, Func, Symbol};
pub use solve::solve_linear;

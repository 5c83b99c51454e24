use thiserror::Error;

/// Errors that can occur when isolating a symbol.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The relation does not depend on the symbol.
    #[error("relation does not determine `{symbol}`")]
    NoSolution { symbol: String },

    /// The relation is polynomial in the symbol but not linear.
    #[error("relation has degree {degree} in `{symbol}`, so its solution is not unique")]
    NotUnique { symbol: String, degree: u32 },

    /// The symbol appears inside a denominator, a negative power, or a function.
    #[error("relation is not polynomial in `{symbol}`")]
    NonPolynomial { symbol: String },
}

/// Errors that can occur when compiling an expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("expression mentions `{name}`, which is not in the argument list")]
    UnboundSymbol { name: String },
}

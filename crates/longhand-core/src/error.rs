//! Error types for the Longhand kernel.
//!
//! Every kernel operation either succeeds or fails with exactly one of the
//! variants below. Exhausting a solver's iteration budget is deliberately
//! absent: that outcome is a terminal status carried in the success value,
//! not a failure.

use thiserror::Error;

/// A specialized Result type for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;

/// Errors that can occur during kernel operations.
#[derive(Error, Debug, Clone)]
pub enum KernelError {
    /// Matrix shapes do not allow the requested operation.
    #[error("Incompatible matrix dimensions: ({rows1}x{cols1}) and ({rows2}x{cols2})")]
    DimensionMismatch {
        /// Rows in first matrix.
        rows1: usize,
        /// Columns in first matrix.
        cols1: usize,
        /// Rows in second matrix.
        rows2: usize,
        /// Columns in second matrix.
        cols2: usize,
    },

    /// The operation is defined for square matrices only.
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Rows in the offending matrix.
        rows: usize,
        /// Columns in the offending matrix.
        cols: usize,
    },

    /// Elimination found no usable pivot while one was required.
    #[error("Matrix is singular: pivot in column {column} has magnitude {pivot:.2e}")]
    Singular {
        /// Zero-based column whose pivot vanished.
        column: usize,
        /// The vanishing pivot value.
        pivot: f64,
    },

    /// The normal-equation product of a pseudoinverse is not invertible.
    #[error("Matrix of shape {rows}x{cols} is rank deficient: {product} is singular")]
    RankDeficient {
        /// Rows in the input matrix.
        rows: usize,
        /// Columns in the input matrix.
        cols: usize,
        /// Which inner product turned out singular.
        product: String,
    },

    /// An expression failed to parse.
    #[error("Parse error at byte {position}: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
        /// Byte offset of the offending token.
        position: usize,
    },

    /// A user function produced NaN or an infinity.
    #[error("f({x}) is not finite")]
    NonFiniteEvaluation {
        /// The evaluation point.
        x: f64,
    },

    /// The convergence tolerance is not a positive finite number.
    #[error("Tolerance must be positive, got {tolerance}")]
    InvalidTolerance {
        /// The rejected tolerance.
        tolerance: f64,
    },

    /// The iteration budget is zero.
    #[error("Iteration budget must be at least 1")]
    InvalidIterationBudget,

    /// Bracket endpoints are not an increasing interval.
    #[error("Invalid bracket: [{a}, {b}] is not an increasing interval")]
    InvalidBracket {
        /// Lower endpoint.
        a: f64,
        /// Upper endpoint.
        b: f64,
    },

    /// Bracket endpoints do not straddle a sign change.
    #[error("f({a}) = {f_a:.2e} and f({b}) = {f_b:.2e} do not have opposite signs")]
    SignConditionViolated {
        /// Lower endpoint.
        a: f64,
        /// Upper endpoint.
        b: f64,
        /// Function value at `a`.
        f_a: f64,
        /// Function value at `b`.
        f_b: f64,
    },

    /// Newton-Raphson hit a vanishing derivative.
    #[error("Derivative vanished at x = {x} (f'(x) = {derivative:.2e})")]
    ZeroDerivative {
        /// The iterate where the derivative vanished.
        x: f64,
        /// The vanishing derivative value.
        derivative: f64,
    },

    /// The secant slope collapsed to zero.
    #[error("Secant slope degenerated: f(x0) = {f_x0:.2e} and f(x1) = {f_x1:.2e} are too close")]
    DegenerateSlope {
        /// Function value at the older iterate.
        f_x0: f64,
        /// Function value at the newer iterate.
        f_x1: f64,
    },

    /// The secant method was given the same guess twice.
    #[error("Initial guesses must differ, both are {x}")]
    IdenticalGuesses {
        /// The repeated guess.
        x: f64,
    },

    /// Matrix input was empty or ragged.
    #[error("Matrix input is incomplete: {reason}")]
    IncompleteInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Eigenvalues were requested for an order with no closed form here.
    #[error("Eigenvalues are only supported for 2x2 matrices, got {n}x{n}")]
    UnsupportedOrder {
        /// Order of the offending matrix.
        n: usize,
    },
}

impl KernelError {
    /// Creates a dimension mismatch error.
    #[must_use]
    pub fn dimension_mismatch(rows1: usize, cols1: usize, rows2: usize, cols2: usize) -> Self {
        Self::DimensionMismatch {
            rows1,
            cols1,
            rows2,
            cols2,
        }
    }

    /// Creates an incomplete input error.
    #[must_use]
    pub fn incomplete_input(reason: impl Into<String>) -> Self {
        Self::IncompleteInput {
            reason: reason.into(),
        }
    }

    /// Creates a singular matrix error.
    #[must_use]
    pub fn singular(column: usize, pivot: f64) -> Self {
        Self::Singular { column, pivot }
    }
}

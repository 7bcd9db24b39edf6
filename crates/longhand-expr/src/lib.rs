//! # Longhand Expr
//!
//! Single-variable expression language for the longhand numeric kernel:
//!
//! - **Lexer** built on `logos` with a compact token set
//! - **Parser** by recursive descent, producing a serializable AST
//! - **Evaluator** over `f64` with explicit finiteness checking
//! - **Symbolic derivatives** for polynomial-shaped expressions
//!
//! Expressions are functions of the single variable `x` and may use the
//! constants `pi` and `e`, the functions `sqrt`, `sin`, `cos`, `tan`,
//! `log`, `ln`, `exp`, and the operators `+ - * / ^` with conventional
//! precedence.
//!
//! ## Design Philosophy
//!
//! - **One variable**: expressions are functions of `x`, nothing else
//! - **Finite by default**: [`Program::eval`] rejects non-finite values so
//!   solvers never iterate on poisoned numbers
//! - **Derivatives degrade gracefully**: outside the symbolic subset the
//!   caller falls back to numerical differentiation
//!
//! ## Example
//!
//! ```rust
//! use longhand_expr::compile;
//!
//! let program = compile("x^2 - 4").unwrap();
//! assert_eq!(program.eval(3.0).unwrap(), 5.0);
//!
//! let derivative = program.symbolic_derivative().unwrap();
//! assert_eq!(derivative.source(), "2 * x");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod ast;
pub mod token;

mod derivative;
mod error;
mod eval;
mod parser;

use serde::{Deserialize, Serialize};

use crate::ast::Expr;
pub use crate::error::{EvalError, ParseError};

/// A compiled expression together with the source it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    source: String,
    ast: Expr,
}

/// Compiles a source string into a [`Program`].
///
/// # Example
///
/// ```rust
/// use longhand_expr::compile;
///
/// let program = compile("sin(x) + 1").unwrap();
/// assert_eq!(program.source(), "sin(x) + 1");
/// assert!(compile("sin +").is_err());
/// ```
pub fn compile(source: &str) -> Result<Program, ParseError> {
    let ast = parser::parse(source)?;
    Ok(Program {
        source: source.to_string(),
        ast,
    })
}

impl Program {
    /// Source text the program was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parsed expression tree.
    #[must_use]
    pub fn ast(&self) -> &Expr {
        &self.ast
    }

    /// Evaluates the program at `x`, rejecting non-finite results.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        let value = eval::eval_ast(&self.ast, x);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError { x, value })
        }
    }

    /// Evaluates the program at `x` without the finiteness check.
    #[must_use]
    pub fn eval_raw(&self, x: f64) -> f64 {
        eval::eval_ast(&self.ast, x)
    }

    /// Borrows the program as a plain `f64 -> f64` function.
    pub fn as_fn(&self) -> impl Fn(f64) -> f64 + '_ {
        move |x| self.eval_raw(x)
    }

    /// Symbolic derivative as a new program, `None` when the expression
    /// falls outside the polynomial-shaped subset.
    ///
    /// The derivative's source text is rendered from its simplified tree.
    #[must_use]
    pub fn symbolic_derivative(&self) -> Option<Program> {
        let ast = derivative::differentiate(&self.ast)?;
        Some(Program {
            source: ast.to_string(),
            ast,
        })
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::ast::{BinOp, Constant, Expr, UnaryFn};
    pub use crate::{compile, EvalError, ParseError, Program};
}

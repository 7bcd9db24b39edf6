//! Token definitions for the expression lexer.

use logos::Logos;

/// Tokens of the expression language.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    /// Numeric literal, optionally fractional with a decimal exponent.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    /// The single free variable.
    #[token("x")]
    Var,

    /// The constant pi.
    #[token("pi")]
    Pi,

    /// Euler's number.
    #[token("e")]
    E,

    /// Square root function.
    #[token("sqrt")]
    Sqrt,

    /// Sine function.
    #[token("sin")]
    Sin,

    /// Cosine function.
    #[token("cos")]
    Cos,

    /// Tangent function.
    #[token("tan")]
    Tan,

    /// Base-10 logarithm.
    #[token("log")]
    Log,

    /// Natural logarithm.
    #[token("ln")]
    Ln,

    /// Exponential function.
    #[token("exp")]
    Exp,

    /// Addition operator.
    #[token("+")]
    Plus,

    /// Subtraction or negation operator.
    #[token("-")]
    Minus,

    /// Multiplication operator.
    #[token("*")]
    Star,

    /// Division operator.
    #[token("/")]
    Slash,

    /// Exponentiation operator.
    #[token("^")]
    Caret,

    /// Opening parenthesis.
    #[token("(")]
    LParen,

    /// Closing parenthesis.
    #[token(")")]
    RParen,
}

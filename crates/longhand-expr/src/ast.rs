//! Abstract syntax tree for single-variable expressions.

use serde::{Deserialize, Serialize};

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
    /// Exponentiation.
    Pow,
}

impl BinOp {
    fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Binding strength, higher binds tighter.
    fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }
}

/// Built-in unary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryFn {
    /// Square root.
    Sqrt,
    /// Sine (radians).
    Sin,
    /// Cosine (radians).
    Cos,
    /// Tangent (radians).
    Tan,
    /// Base-10 logarithm.
    Log,
    /// Natural logarithm.
    Ln,
    /// Exponential.
    Exp,
}

impl UnaryFn {
    /// Name as written in source.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Exp => "exp",
        }
    }

    /// Applies the function to a value.
    #[must_use]
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Self::Sqrt => v.sqrt(),
            Self::Sin => v.sin(),
            Self::Cos => v.cos(),
            Self::Tan => v.tan(),
            Self::Log => v.log10(),
            Self::Ln => v.ln(),
            Self::Exp => v.exp(),
        }
    }
}

/// Named mathematical constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constant {
    /// The circle constant.
    Pi,
    /// Euler's number.
    E,
}

impl Constant {
    /// Numeric value of the constant.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
        }
    }
}

/// Expression tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// The free variable `x`.
    Var,
    /// A named constant.
    Const(Constant),
    /// Unary negation.
    Neg(Box<Expr>),
    /// Binary operation.
    Binary(Box<Expr>, BinOp, Box<Expr>),
    /// Unary function application.
    Call(UnaryFn, Box<Expr>),
}

impl Expr {
    /// True when the subtree references the free variable.
    #[must_use]
    pub fn contains_var(&self) -> bool {
        match self {
            Self::Number(_) | Self::Const(_) => false,
            Self::Var => true,
            Self::Neg(inner) | Self::Call(_, inner) => inner.contains_var(),
            Self::Binary(l, _, r) => l.contains_var() || r.contains_var(),
        }
    }

    /// Binding strength of the node when rendered, higher binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Self::Number(_) | Self::Var | Self::Const(_) | Self::Call(..) => 4,
            Self::Binary(_, op, _) => op.precedence(),
            Self::Neg(_) => 1,
        }
    }

    fn fmt_operand(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        needs_parens: bool,
    ) -> std::fmt::Result {
        if needs_parens {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Var => write!(f, "x"),
            Self::Const(c) => write!(f, "{}", c.symbol()),
            Self::Neg(inner) => {
                let parens = matches!(&**inner, Self::Binary(_, op, _) if op.precedence() <= 2);
                write!(f, "-")?;
                inner.fmt_operand(f, parens)
            }
            Self::Binary(l, op, r) => {
                let prec = op.precedence();
                // Right side needs parens at equal precedence for the
                // non-associative direction: a - (b - c), a / (b / c).
                // Pow is right-associative, so the left side does instead.
                let left_parens =
                    l.precedence() < prec || (l.precedence() == prec && *op == BinOp::Pow);
                let right_parens = r.precedence() < prec
                    || (r.precedence() == prec && matches!(op, BinOp::Sub | BinOp::Div));
                l.fmt_operand(f, left_parens)?;
                if *op == BinOp::Pow {
                    write!(f, "{}", op.symbol())?;
                } else {
                    write!(f, " {} ", op.symbol())?;
                }
                r.fmt_operand(f, right_parens)
            }
            Self::Call(func, arg) => write!(f, "{}({arg})", func.name()),
        }
    }
}

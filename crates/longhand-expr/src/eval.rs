//! Expression evaluation.

use crate::ast::{BinOp, Expr};

/// Evaluates an expression tree at a point.
///
/// Non-finite intermediates are allowed to flow through; callers that need
/// finite results check the final value.
pub(crate) fn eval_ast(expr: &Expr, x: f64) -> f64 {
    match expr {
        Expr::Number(n) => *n,
        Expr::Var => x,
        Expr::Const(c) => c.value(),
        Expr::Neg(inner) => -eval_ast(inner, x),
        Expr::Binary(l, op, r) => {
            let lhs = eval_ast(l, x);
            let rhs = eval_ast(r, x);
            match op {
                BinOp::Add => lhs + rhs,
                BinOp::Sub => lhs - rhs,
                BinOp::Mul => lhs * rhs,
                BinOp::Div => lhs / rhs,
                BinOp::Pow => lhs.powf(rhs),
            }
        }
        Expr::Call(func, arg) => func.apply(eval_ast(arg, x)),
    }
}

//! Symbolic differentiation for a polynomial-shaped subset of expressions.
//!
//! The supported subset covers sums and differences, constant multiples,
//! and integer powers of the variable. Anything outside it (products of
//! two variable terms, quotients, function calls) returns `None` and the
//! caller falls back to numerical differentiation.

use crate::ast::{BinOp, Expr};
use crate::eval::eval_ast;

/// Differentiates an expression, or `None` when it falls outside the
/// supported subset. The result is simplified for readability.
pub(crate) fn differentiate(expr: &Expr) -> Option<Expr> {
    let raw = d(expr)?;
    Some(simplify(raw))
}

fn d(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Number(_) | Expr::Const(_) => Some(Expr::Number(0.0)),
        Expr::Var => Some(Expr::Number(1.0)),
        Expr::Neg(inner) => Some(Expr::Neg(Box::new(d(inner)?))),
        Expr::Binary(l, op, r) => match op {
            BinOp::Add | BinOp::Sub => Some(Expr::Binary(
                Box::new(d(l)?),
                *op,
                Box::new(d(r)?),
            )),
            BinOp::Mul => {
                if !l.contains_var() {
                    Some(Expr::Binary(l.clone(), BinOp::Mul, Box::new(d(r)?)))
                } else if !r.contains_var() {
                    Some(Expr::Binary(r.clone(), BinOp::Mul, Box::new(d(l)?)))
                } else {
                    None
                }
            }
            BinOp::Pow => {
                if !matches!(**l, Expr::Var) {
                    return None;
                }
                let n = constant_value(r)?;
                if n.fract() != 0.0 {
                    return None;
                }
                Some(Expr::Binary(
                    Box::new(Expr::Number(n)),
                    BinOp::Mul,
                    Box::new(Expr::Binary(
                        Box::new(Expr::Var),
                        BinOp::Pow,
                        Box::new(Expr::Number(n - 1.0)),
                    )),
                ))
            }
            BinOp::Div => None,
        },
        Expr::Call(..) => None,
    }
}

/// Value of a variable-free subtree, `None` when it references the
/// variable or does not fold to a finite number.
fn constant_value(expr: &Expr) -> Option<f64> {
    if expr.contains_var() {
        return None;
    }
    let v = eval_ast(expr, 0.0);
    v.is_finite().then_some(v)
}

fn simplify(expr: Expr) -> Expr {
    match expr {
        Expr::Neg(inner) => {
            let inner = simplify(*inner);
            if let Expr::Number(n) = inner {
                return Expr::Number(-n);
            }
            Expr::Neg(Box::new(inner))
        }
        Expr::Binary(l, op, r) => {
            let l = simplify(*l);
            let r = simplify(*r);
            simplify_binary(l, op, r)
        }
        Expr::Call(func, arg) => Expr::Call(func, Box::new(simplify(*arg))),
        other => other,
    }
}

fn is_num(expr: &Expr, v: f64) -> bool {
    matches!(expr, Expr::Number(n) if *n == v)
}

/// Folds `a * (b * g)` into `(a*b) * g` so chained constant factors
/// collapse into a single coefficient.
fn merge_constant_factor(l: &Expr, r: &Expr) -> Option<Expr> {
    if let (Expr::Number(a), Expr::Binary(rl, BinOp::Mul, rr)) = (l, r) {
        if let Expr::Number(b) = &**rl {
            return Some(Expr::Binary(
                Box::new(Expr::Number(a * b)),
                BinOp::Mul,
                rr.clone(),
            ));
        }
    }
    None
}

fn simplify_binary(l: Expr, op: BinOp, r: Expr) -> Expr {
    if let (Expr::Number(a), Expr::Number(b)) = (&l, &r) {
        let folded = match op {
            BinOp::Add => a + b,
            BinOp::Sub => a - b,
            BinOp::Mul => a * b,
            BinOp::Div => a / b,
            BinOp::Pow => a.powf(*b),
        };
        if folded.is_finite() {
            return Expr::Number(folded);
        }
    }

    match op {
        BinOp::Add if is_num(&l, 0.0) => r,
        BinOp::Add | BinOp::Sub if is_num(&r, 0.0) => l,
        BinOp::Sub if is_num(&l, 0.0) => Expr::Neg(Box::new(r)),
        BinOp::Mul if is_num(&l, 0.0) || is_num(&r, 0.0) => Expr::Number(0.0),
        BinOp::Mul if is_num(&l, 1.0) => r,
        BinOp::Mul if is_num(&r, 1.0) => l,
        BinOp::Mul => match merge_constant_factor(&l, &r) {
            Some(merged) => merged,
            None => Expr::Binary(Box::new(l), op, Box::new(r)),
        },
        BinOp::Pow if is_num(&r, 1.0) => l,
        BinOp::Pow if is_num(&r, 0.0) => Expr::Number(1.0),
        _ => Expr::Binary(Box::new(l), op, Box::new(r)),
    }
}

//! Recursive-descent parser for the expression grammar.
//!
//! Grammar, from loosest to tightest binding:
//!
//! ```text
//! expr    := mul_div (("+" | "-") mul_div)*
//! mul_div := unary (("*" | "/") unary)*
//! unary   := ("-" | "+") unary | power
//! power   := primary ("^" unary)?
//! primary := NUMBER | "x" | "pi" | "e" | FUNC "(" expr ")" | "(" expr ")"
//! ```
//!
//! Exponentiation is right-associative and binds tighter than negation,
//! so `-x^2` parses as `-(x^2)` and `2^-3` accepts the signed exponent.

use logos::Logos;

use crate::ast::{BinOp, Constant, Expr, UnaryFn};
use crate::error::ParseError;
use crate::token::Token;

const PRIMARY_EXPECTED: &str = "a number, 'x', a constant, a function call, or '('";

#[derive(Debug, Clone)]
struct TokenInfo {
    token: Token,
    lexeme: String,
    position: usize,
}

/// Parses a source string into an expression tree.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push(TokenInfo {
                token,
                lexeme: lexer.slice().to_string(),
                position: span.start,
            }),
            Err(()) => {
                return Err(ParseError {
                    message: format!("unrecognized symbol '{}'", &input[span.clone()]),
                    position: span.start,
                    found_token: Some(input[span].to_string()),
                    expected: None,
                });
            }
        }
    }

    if tokens.is_empty() {
        return Err(ParseError {
            message: String::from("empty expression"),
            position: 0,
            found_token: None,
            expected: None,
        });
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        input: input.to_string(),
    };
    let expr = parser.parse_expr()?;
    if parser.pos < parser.tokens.len() {
        return Err(parser.error("unexpected input after expression"));
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<TokenInfo>,
    pos: usize,
    input: String,
}

impl Parser {
    fn peek(&self) -> Option<&TokenInfo> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<TokenInfo> {
        let info = self.tokens.get(self.pos).cloned();
        if info.is_some() {
            self.pos += 1;
        }
        info
    }

    fn check(&self, token: Token) -> bool {
        matches!(self.peek(), Some(info) if info.token == token)
    }

    fn consume(&mut self, token: Token) -> bool {
        if self.check(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: Token, description: &str) -> Result<(), ParseError> {
        if self.consume(token) {
            return Ok(());
        }
        let message = if self.peek().is_some() {
            "unexpected token"
        } else {
            "unexpected end of input"
        };
        Err(self.error_with_expected(message, description))
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        let (position, found_token) = match self.peek() {
            Some(info) => (info.position, Some(info.lexeme.clone())),
            None => (self.input.len(), None),
        };
        ParseError {
            message: message.into(),
            position,
            found_token,
            expected: None,
        }
    }

    fn error_with_expected(
        &self,
        message: impl Into<String>,
        expected: impl Into<String>,
    ) -> ParseError {
        let mut err = self.error(message);
        err.expected = Some(expected.into());
        err
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_add_sub()
    }

    fn parse_add_sub(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_mul_div()?;
        loop {
            let op = if self.consume(Token::Plus) {
                BinOp::Add
            } else if self.consume(Token::Minus) {
                BinOp::Sub
            } else {
                break;
            };
            let rhs = self.parse_mul_div()?;
            expr = Expr::Binary(Box::new(expr), op, Box::new(rhs));
        }
        Ok(expr)
    }

    fn parse_mul_div(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_unary()?;
        loop {
            let op = if self.consume(Token::Star) {
                BinOp::Mul
            } else if self.consume(Token::Slash) {
                BinOp::Div
            } else {
                break;
            };
            let rhs = self.parse_unary()?;
            expr = Expr::Binary(Box::new(expr), op, Box::new(rhs));
        }
        Ok(expr)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.consume(Token::Minus) {
            let inner = self.parse_unary()?;
            return Ok(Expr::Neg(Box::new(inner)));
        }
        if self.consume(Token::Plus) {
            return self.parse_unary();
        }
        self.parse_power()
    }

    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_primary()?;
        if self.consume(Token::Caret) {
            let exponent = self.parse_unary()?;
            return Ok(Expr::Binary(Box::new(base), BinOp::Pow, Box::new(exponent)));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let info = match self.advance() {
            Some(info) => info,
            None => {
                return Err(
                    self.error_with_expected("unexpected end of input", PRIMARY_EXPECTED)
                );
            }
        };

        match info.token {
            Token::Number => {
                let value: f64 = info.lexeme.parse().map_err(|_| ParseError {
                    message: format!("invalid number literal '{}'", info.lexeme),
                    position: info.position,
                    found_token: Some(info.lexeme.clone()),
                    expected: None,
                })?;
                Ok(Expr::Number(value))
            }
            Token::Var => Ok(Expr::Var),
            Token::Pi => Ok(Expr::Const(Constant::Pi)),
            Token::E => Ok(Expr::Const(Constant::E)),
            Token::Sqrt => self.parse_call(UnaryFn::Sqrt),
            Token::Sin => self.parse_call(UnaryFn::Sin),
            Token::Cos => self.parse_call(UnaryFn::Cos),
            Token::Tan => self.parse_call(UnaryFn::Tan),
            Token::Log => self.parse_call(UnaryFn::Log),
            Token::Ln => self.parse_call(UnaryFn::Ln),
            Token::Exp => self.parse_call(UnaryFn::Exp),
            Token::LParen => {
                let expr = self.parse_expr()?;
                self.expect(Token::RParen, "')'")?;
                Ok(expr)
            }
            _ => Err(ParseError {
                message: String::from("unexpected token"),
                position: info.position,
                found_token: Some(info.lexeme),
                expected: Some(String::from(PRIMARY_EXPECTED)),
            }),
        }
    }

    fn parse_call(&mut self, func: UnaryFn) -> Result<Expr, ParseError> {
        self.expect(Token::LParen, &format!("'(' after '{}'", func.name()))?;
        let arg = self.parse_expr()?;
        self.expect(Token::RParen, "')'")?;
        Ok(Expr::Call(func, Box::new(arg)))
    }
}

//! Error types for parsing and evaluation.

use longhand_core::KernelError;
use thiserror::Error;

/// Parse error with source position context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong.
    pub message: String,
    /// Byte offset into the source where the error was detected.
    pub position: usize,
    /// Source text of the offending token, if one was present.
    pub found_token: Option<String>,
    /// What the parser expected at this point, if known.
    pub expected: Option<String>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error at position {}: {}", self.position, self.message)?;
        if let Some(found) = &self.found_token {
            write!(f, " (found: '{found}')")?;
        }
        if let Some(expected) = &self.expected {
            write!(f, " (expected: {expected})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for KernelError {
    fn from(err: ParseError) -> Self {
        let mut message = err.message.clone();
        if let Some(found) = &err.found_token {
            message.push_str(&format!(" (found: '{found}')"));
        }
        if let Some(expected) = &err.expected {
            message.push_str(&format!(" (expected: {expected})"));
        }
        KernelError::Parse {
            message,
            position: err.position,
        }
    }
}

/// Evaluation produced a non-finite value.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("f({x}) is not finite (got {value})")]
pub struct EvalError {
    /// Input the expression was evaluated at.
    pub x: f64,
    /// The non-finite value that was produced.
    pub value: f64,
}

impl From<EvalError> for KernelError {
    fn from(err: EvalError) -> Self {
        KernelError::NonFiniteEvaluation { x: err.x }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError {
            message: String::from("unexpected token"),
            position: 4,
            found_token: Some(String::from(")")),
            expected: Some(String::from("a number, 'x', a constant, or '('")),
        };

        assert_eq!(
            err.to_string(),
            "Parse error at position 4: unexpected token (found: ')') \
             (expected: a number, 'x', a constant, or '(')"
        );
    }

    #[test]
    fn test_parse_error_display_bare() {
        let err = ParseError {
            message: String::from("empty expression"),
            position: 0,
            found_token: None,
            expected: None,
        };

        assert_eq!(err.to_string(), "Parse error at position 0: empty expression");
    }

    #[test]
    fn test_conversion_to_kernel_error() {
        let err = ParseError {
            message: String::from("unexpected token"),
            position: 7,
            found_token: Some(String::from("+")),
            expected: None,
        };

        match KernelError::from(err) {
            KernelError::Parse { message, position } => {
                assert_eq!(position, 7);
                assert!(message.contains("found: '+'"));
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_eval_error_display() {
        let err = EvalError { x: 0.0, value: f64::INFINITY };
        assert_eq!(err.to_string(), "f(0) is not finite (got inf)");
        assert!(matches!(
            KernelError::from(err),
            KernelError::NonFiniteEvaluation { .. }
        ));
    }
}

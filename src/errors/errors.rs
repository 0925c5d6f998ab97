use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ParenthesisMismatch => "ParenthesisMismatch",
            ErrorImpl::InvalidExpression { .. } => "InvalidExpression",
            ErrorImpl::MalformedLiteral { .. } => "MalformedLiteral",
            ErrorImpl::DivisionByZero { .. } => "DivisionByZero",
            ErrorImpl::UnknownOperator { .. } => "UnknownOperator",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ParenthesisMismatch => ErrorTip::Suggestion(String::from(
                "Every `(` needs a matching `)` after it",
            )),
            ErrorImpl::InvalidExpression { leftover: 0 } => ErrorTip::Suggestion(String::from(
                "An operator is missing one of its operands",
            )),
            ErrorImpl::InvalidExpression { leftover } => ErrorTip::Suggestion(format!(
                "{} operands were left over, is an operator missing?",
                leftover
            )),
            ErrorImpl::MalformedLiteral { literal } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::DivisionByZero { operator } => ErrorTip::Suggestion(format!(
                "Right operand of `{}` evaluated to zero",
                operator
            )),
            ErrorImpl::UnknownOperator { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("parenthesis don't match")]
    ParenthesisMismatch,
    /// `leftover` counts the disconnected operands after reduction, or is 0
    /// when an operator ran short of operands.
    #[error("invalid expression")]
    InvalidExpression { leftover: usize },
    #[error("malformed integer literal: {literal:?}")]
    MalformedLiteral { literal: String },
    #[error("division by zero in {operator:?}")]
    DivisionByZero { operator: String },
    #[error("no precedence for operator {operator:?}")]
    UnknownOperator { operator: String },
}

//! The parsing session.
//!
//! A [`Parser`] validates and converts its source once, on construction,
//! and keeps the resulting postfix sequence for its whole lifetime. Trees
//! are built from that cached sequence on demand, as many times as needed.

use crate::{ast::node::NodeRef, errors::errors::Error, lexer::tokens::Token};

use super::{postfix::build_suffix_expression, tree::build_arithmetic_tree};

pub struct Parser {
    /// The source converted to postfix order
    suffix: Vec<Token>,
}

impl Parser {
    /// Parses `source` into a postfix sequence.
    ///
    /// # Arguments
    ///
    /// * `source` - The infix expression text
    /// * `file` - Name used in error positions, `"shell"` when omitted
    ///
    /// # Errors
    ///
    /// `ParenthesisMismatch` when the grouping symbols do not balance.
    pub fn new(source: &str, file: Option<String>) -> Result<Self, Error> {
        Ok(Parser {
            suffix: build_suffix_expression(source, file)?,
        })
    }

    /// The cached postfix sequence.
    pub fn postfix(&self) -> &[Token] {
        &self.suffix
    }

    /// The postfix lexemes joined by single spaces.
    pub fn postfix_string(&self) -> String {
        self.suffix
            .iter()
            .map(|token| token.value.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Builds a fresh expression tree from the cached postfix sequence.
    ///
    /// Returns `Ok(None)` for an empty source.
    pub fn build_tree(&self) -> Result<Option<NodeRef>, Error> {
        build_arithmetic_tree(&self.suffix)
    }
}

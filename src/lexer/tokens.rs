use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// End of input. Returned on every pull once the source is exhausted.
    EOF,
    /// Anything the lexer does not recognise.
    Unknown,
    Integer,

    OpenParen,
    CloseParen,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

/// Tokens compare by kind and lexeme. Where they were found does not matter.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Token {}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// True for the five binary operators.
    pub fn is_operator(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
        ])
    }

    /// True for tokens that end a conversion: `EOF` and `Unknown`.
    pub fn is_terminator(&self) -> bool {
        self.is_one_of_many(&[TokenKind::EOF, TokenKind::Unknown])
    }
}

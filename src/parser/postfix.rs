use std::rc::Rc;

use tracing::{debug, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::lookups::binding_power;

/// Returns true iff every `)` closes an earlier `(` and every `(` is closed.
pub fn validate_parenthesis(expression: &str) -> bool {
    find_parenthesis_mismatch(expression).is_none()
}

/// Byte offset of the first `)` without an opener, or of the innermost `(`
/// still open at the end. `None` when the grouping is balanced.
pub fn find_parenthesis_mismatch(expression: &str) -> Option<usize> {
    let mut open = vec![];

    for (offset, byte) in expression.bytes().enumerate() {
        match byte {
            b'(' => open.push(offset),
            b')' if open.pop().is_none() => return Some(offset),
            _ => {}
        }
    }

    open.last().copied()
}

/// Converts an infix expression to postfix order with the shunting-yard
/// algorithm.
///
/// Grouping is checked before any token is read. Conversion stops at the
/// first `EOF` or `Unknown` token. Equal binding powers pop, which makes
/// every operator left-associative.
pub fn build_suffix_expression(expression: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(expression, file);

    if let Some(offset) = find_parenthesis_mismatch(expression) {
        return Err(Error::new(
            ErrorImpl::ParenthesisMismatch,
            Position(offset as u32, Rc::clone(lexer.file())),
        ));
    }

    let mut operators: Vec<Token> = vec![];
    let mut suffix: Vec<Token> = vec![];

    loop {
        let token = lexer.get_next_token();

        match token.kind {
            TokenKind::EOF => break,
            TokenKind::Unknown => {
                warn!(token = %token.value, offset = token.span.start.0, "unrecognised input, stopping conversion");
                break;
            }
            TokenKind::Integer => suffix.push(token),
            TokenKind::OpenParen => operators.push(token),
            TokenKind::CloseParen => loop {
                match operators.pop() {
                    Some(top) if top.kind == TokenKind::OpenParen => break,
                    Some(top) => suffix.push(top),
                    None => {
                        return Err(Error::new(
                            ErrorImpl::ParenthesisMismatch,
                            token.span.start.clone(),
                        ))
                    }
                }
            },
            _ => {
                let power = binding_power(&token)?;

                while let Some(top) = operators.last() {
                    if binding_power(top)? < power {
                        break;
                    }
                    if let Some(top) = operators.pop() {
                        suffix.push(top);
                    }
                }

                operators.push(token);
            }
        }
    }

    // An `(` can only be left here when conversion stopped early on unknown
    // input. It has no meaning in postfix order.
    while let Some(top) = operators.pop() {
        if top.kind != TokenKind::OpenParen {
            suffix.push(top);
        }
    }

    debug!(
        suffix = %suffix.iter().map(Token::to_string).collect::<Vec<_>>().join(" "),
        "built suffix expression"
    );

    Ok(suffix)
}

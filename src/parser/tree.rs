use tracing::debug;

use crate::{
    ast::node::{ExprNode, NodeRef, Operation},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// Reduces a postfix sequence to a single expression tree.
///
/// Each operator takes the two most recently pushed nodes: the first pop is
/// its right operand, the second its left. An empty sequence gives
/// `Ok(None)`. Running short of operands, or ending with more than one node
/// on the stack, is an `InvalidExpression`.
///
/// Every call builds fresh nodes; the input is never modified.
pub fn build_arithmetic_tree(suffix: &[Token]) -> Result<Option<NodeRef>, Error> {
    if suffix.is_empty() {
        return Ok(None);
    }

    let mut nodes: Vec<NodeRef> = Vec::with_capacity(suffix.len());

    for token in suffix {
        match token.kind {
            TokenKind::Integer => nodes.push(ExprNode::literal_at(&token.value, token.span.clone())),
            _ if token.is_operator() => {
                let (Some(right), Some(left)) = (nodes.pop(), nodes.pop()) else {
                    return Err(Error::new(
                        ErrorImpl::InvalidExpression { leftover: 0 },
                        token.span.start.clone(),
                    ));
                };

                nodes.push(ExprNode::from_operation(
                    &token.value,
                    Operation::from_token_kind(token.kind),
                    left,
                    right,
                    token.span.clone(),
                ));
            }
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnknownOperator {
                        operator: token.value.clone(),
                    },
                    token.span.start.clone(),
                ))
            }
        }
    }

    if nodes.len() != 1 {
        let position = nodes
            .get(1)
            .map_or_else(Position::null, |node| node.span.start.clone());

        return Err(Error::new(
            ErrorImpl::InvalidExpression {
                leftover: nodes.len(),
            },
            position,
        ));
    }

    let root = nodes.pop();
    if let Some(root) = &root {
        debug!(nodes = suffix.len(), depth = root.depth(), "built arithmetic tree");
    }

    Ok(root)
}

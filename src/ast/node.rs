use std::{fmt::Display, rc::Rc};

use crate::{lexer::tokens::TokenKind, Span};

/// Shared handle to an expression node.
///
/// A subtree may hang under more than one parent. The graph is acyclic by
/// construction, so plain reference counting is enough.
pub type NodeRef = Rc<ExprNode>;

/// The operation a node performs when evaluated.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operation {
    Literal,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Operation {
    /// Maps an operator token kind to its operation. Non-operators map to
    /// `Literal`.
    pub fn from_token_kind(kind: TokenKind) -> Operation {
        match kind {
            TokenKind::Plus => Operation::Add,
            TokenKind::Dash => Operation::Subtract,
            TokenKind::Star => Operation::Multiply,
            TokenKind::Slash => Operation::Divide,
            TokenKind::Percent => Operation::Modulo,
            _ => Operation::Literal,
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Expression Node
/// A literal leaf, or a binary operation over exactly two children.
#[derive(Debug, Clone)]
pub struct ExprNode {
    /// The lexeme this node came from, e.g. `"5"` or `"+"`
    pub label: String,
    pub operation: Operation,
    pub left: Option<NodeRef>,
    pub right: Option<NodeRef>,
    pub span: Span,
}

impl ExprNode {
    pub fn literal(label: &str) -> NodeRef {
        Self::literal_at(label, Span::null())
    }

    pub fn literal_at(label: &str, span: Span) -> NodeRef {
        Rc::new(ExprNode {
            label: label.to_string(),
            operation: Operation::Literal,
            left: None,
            right: None,
            span,
        })
    }

    /// Builds an operator node with no source location, for composing
    /// expressions by hand.
    pub fn binary(label: &str, operation: Operation, left: NodeRef, right: NodeRef) -> NodeRef {
        Self::from_operation(label, operation, left, right, Span::null())
    }

    pub fn from_operation(
        label: &str,
        operation: Operation,
        left: NodeRef,
        right: NodeRef,
        span: Span,
    ) -> NodeRef {
        Rc::new(ExprNode {
            label: label.to_string(),
            operation,
            left: Some(left),
            right: Some(right),
            span,
        })
    }

    pub fn is_literal(&self) -> bool {
        self.operation == Operation::Literal
    }

    /// Longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];

        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(
                node.left
                    .iter()
                    .chain(node.right.iter())
                    .map(|child| (child.as_ref(), level + 1)),
            );
        }

        deepest
    }
}

/// Tears the tree down with a work stack instead of recursing per level, so
/// dropping a long `1 + 1 + ... + 1` chain cannot overflow the call stack.
/// Children still held elsewhere are only released, not taken apart.
impl Drop for ExprNode {
    fn drop(&mut self) {
        let mut pending: Vec<NodeRef> = self.left.take().into_iter().chain(self.right.take()).collect();

        while let Some(node) = pending.pop() {
            if let Ok(mut node) = Rc::try_unwrap(node) {
                pending.extend(node.left.take());
                pending.extend(node.right.take());
            }
        }
    }
}

/// Nodes are equal when label, operation and both subtrees are equal.
/// Spans are ignored, and so is whether children are the same instance.
/// Comparison recurses once per tree level.
impl PartialEq for ExprNode {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.operation == other.operation
            && self.left == other.left
            && self.right == other.right
    }
}

impl Eq for ExprNode {}

/// Prefix rendering: `*(2, +(5, 3))`. Recurses once per tree level.
impl Display for ExprNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => write!(f, "{}({}, {})", self.label, left, right),
            _ => write!(f, "{}", self.label),
        }
    }
}

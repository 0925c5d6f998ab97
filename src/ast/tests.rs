use crate::ast::node::{ExprNode, Operation};
use crate::lexer::tokens::TokenKind;
use crate::{Position, Span};
use std::rc::Rc;

#[test]
fn test_operation_from_token_kind() {
    assert_eq!(Operation::from_token_kind(TokenKind::Plus), Operation::Add);
    assert_eq!(Operation::from_token_kind(TokenKind::Dash), Operation::Subtract);
    assert_eq!(Operation::from_token_kind(TokenKind::Star), Operation::Multiply);
    assert_eq!(Operation::from_token_kind(TokenKind::Slash), Operation::Divide);
    assert_eq!(Operation::from_token_kind(TokenKind::Percent), Operation::Modulo);
    assert_eq!(Operation::from_token_kind(TokenKind::Integer), Operation::Literal);
}

#[test]
fn test_equality_ignores_span_and_identity() {
    let here = Span {
        start: Position(4, Rc::new("a".to_string())),
        end: Position(5, Rc::new("a".to_string())),
    };
    let placed = ExprNode::literal_at("5", here);

    assert_eq!(placed, ExprNode::literal("5"));
    assert!(!Rc::ptr_eq(&placed, &ExprNode::literal("5")));
}

#[test]
fn test_equality_compares_shape() {
    let sum = ExprNode::binary("+", Operation::Add, ExprNode::literal("1"), ExprNode::literal("2"));
    let swapped = ExprNode::binary("+", Operation::Add, ExprNode::literal("2"), ExprNode::literal("1"));
    let relabelled = ExprNode::binary("-", Operation::Add, ExprNode::literal("1"), ExprNode::literal("2"));

    assert_ne!(sum, swapped);
    assert_ne!(sum, relabelled);
    assert_ne!(sum, ExprNode::literal("+"));
}

#[test]
fn test_prefix_display() {
    let addition = ExprNode::binary("+", Operation::Add, ExprNode::literal("5"), ExprNode::literal("3"));
    let tree = ExprNode::binary("*", Operation::Multiply, ExprNode::literal("2"), addition);

    assert_eq!(tree.to_string(), "*(2, +(5, 3))");
}

#[test]
fn test_shared_children() {
    let leaf = ExprNode::literal("7");
    let tree = ExprNode::binary("*", Operation::Multiply, Rc::clone(&leaf), Rc::clone(&leaf));

    assert_eq!(Rc::strong_count(&leaf), 3);
    assert!(Rc::ptr_eq(
        tree.left.as_ref().unwrap(),
        tree.right.as_ref().unwrap()
    ));
    assert!(!tree.is_literal());
    assert!(leaf.is_literal());
    assert_eq!(tree.depth(), 2);
}

#[test]
fn test_drop_keeps_children_held_elsewhere() {
    let leaf = ExprNode::literal("4");
    let sum = ExprNode::binary("+", Operation::Add, Rc::clone(&leaf), ExprNode::literal("1"));
    let tree = ExprNode::binary("*", Operation::Multiply, Rc::clone(&sum), Rc::clone(&leaf));

    drop(tree);
    assert_eq!(Rc::strong_count(&sum), 1);
    assert_eq!(Rc::strong_count(&leaf), 2);

    drop(sum);
    assert_eq!(Rc::strong_count(&leaf), 1);
    assert_eq!(leaf.eval().unwrap(), 4);
}

#[test]
fn test_depth_of_left_leaning_chain() {
    let mut tree = ExprNode::literal("1");
    for _ in 0..3 {
        tree = ExprNode::binary("-", Operation::Subtract, tree, ExprNode::literal("1"));
    }

    assert_eq!(tree.depth(), 4);
    assert_eq!(tree.eval().unwrap(), -2);
}

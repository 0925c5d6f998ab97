//! End-to-end tests through the public API.
//!
//! These cover the whole pipeline: session construction, the cached postfix
//! sequence, tree building and evaluation.

use arithmetic::{
    ast::node::{ExprNode, Operation},
    errors::errors::ErrorImpl,
    evaluate_source,
    lexer::tokens::TokenKind,
    parser::parser::Parser,
};
use rstest::rstest;
use std::rc::Rc;

fn evaluate(source: &str) -> i64 {
    Parser::new(source, None)
        .unwrap()
        .build_tree()
        .unwrap()
        .unwrap()
        .eval()
        .unwrap()
}

#[rstest]
#[case("2 * 5 + 3", 13)]
#[case("2 * (5 + 3)", 16)]
#[case("(2 * (5) + 3)", 13)]
#[case("(2 * ((5) + 3))", 16)]
#[case("(10 - 5) * 5 + 21/7", 28)]
#[case("10 - 5 - 3", 2)]
#[case("100 / 10 / 5", 2)]
#[case("17 % 5 * 3", 6)]
#[case("2 + 3 * 4 - 6 / 2", 11)]
#[case("7", 7)]
fn test_parsing_result(#[case] source: &str, #[case] expected: i64) {
    assert_eq!(evaluate(source), expected);
}

#[test]
fn test_deep_expression() {
    // 42 - (24 * -8202) * 4990
    let source = "(18+24)-(4*6*(14/1+(25*1+(8-10)+(22/3*(23-3*(16*25))))))*(8*17-(11-3+(13*17*(12/9-(16+8-(15/8))))))";

    assert_eq!(evaluate(source), 982_271_562);
}

#[test]
fn test_golden_postfix() {
    let parser = Parser::new("(10 - 5) * 5 + 21/7", None).unwrap();
    let golden = [
        (TokenKind::Integer, "10"),
        (TokenKind::Integer, "5"),
        (TokenKind::Dash, "-"),
        (TokenKind::Integer, "5"),
        (TokenKind::Star, "*"),
        (TokenKind::Integer, "21"),
        (TokenKind::Integer, "7"),
        (TokenKind::Slash, "/"),
        (TokenKind::Plus, "+"),
    ];

    let actual: Vec<(TokenKind, &str)> = parser
        .postfix()
        .iter()
        .map(|token| (token.kind, token.value.as_str()))
        .collect();

    assert_eq!(actual, golden);
}

#[test]
fn test_parenthesis_mismatch() {
    for source in ["2 * )5 + 3(", "2 * ((5 + 3)", ")("] {
        let error = Parser::new(source, None).err().unwrap();

        assert_eq!(error.kind(), &ErrorImpl::ParenthesisMismatch);
    }
}

#[test]
fn test_division_by_zero_at_evaluation() {
    let parser = Parser::new("6 / (3 - 3)", None).unwrap();
    let tree = parser.build_tree().unwrap().unwrap();
    let error = tree.eval().unwrap_err();

    assert!(matches!(error.kind(), ErrorImpl::DivisionByZero { .. }));
    assert_eq!(error.get_position().0, 2);

    let error = evaluate_source("6 % 0").unwrap_err();
    assert!(matches!(error.kind(), ErrorImpl::DivisionByZero { operator } if operator == "%"));
}

#[test]
fn test_literal_out_of_range() {
    let error = evaluate_source("99999999999999999999 + 1").unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::MalformedLiteral {
            literal: "99999999999999999999".to_string()
        }
    );
}

#[test]
fn test_empty_source() {
    assert_eq!(evaluate_source("").unwrap(), None);
}

#[test]
fn test_invalid_expression() {
    let error = evaluate_source("1 2 +  3").unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::InvalidExpression { leftover: 2 });
}

#[test]
fn test_compose_with_built_trees() {
    let sum = Parser::new("5 + 3", None).unwrap().build_tree().unwrap().unwrap();
    let square = ExprNode::binary("*", Operation::Multiply, Rc::clone(&sum), Rc::clone(&sum));

    assert_eq!(square.eval().unwrap(), 64);
    assert_eq!(sum.eval().unwrap(), 8);
    assert_eq!(square.to_string(), "*(+(5, 3), +(5, 3))");
}

#[test]
fn test_rebuilt_trees_are_equal() {
    let parser = Parser::new("2 * (5 + 3)", None).unwrap();

    assert_eq!(parser.build_tree().unwrap(), parser.build_tree().unwrap());
    assert_eq!(parser.build_tree().unwrap().unwrap().eval().unwrap(), 16);
}

#[test]
fn test_long_flat_chain_on_small_stack() {
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| {
            let source = vec!["1"; 200_000].join("+");
            let parser = Parser::new(&source, None).unwrap();
            let tree = parser.build_tree().unwrap().unwrap();
            let depth = tree.depth();
            let value = tree.eval().unwrap();

            drop(tree);
            let rebuilt = parser.build_tree().unwrap();
            drop(rebuilt);

            (depth, value)
        })
        .unwrap();

    assert_eq!(handle.join().unwrap(), (200_000, 200_000));
}

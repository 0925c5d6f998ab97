use tracing::trace;

use crate::{
    ast::node::{ExprNode, Operation},
    errors::errors::{Error, ErrorImpl},
};

impl ExprNode {
    /// Evaluates this node and everything under it.
    pub fn eval(&self) -> Result<i64, Error> {
        evaluate(self)
    }
}

enum Step<'a> {
    /// Schedule a node: literals produce a value, operators queue their
    /// operands and then themselves.
    Visit(&'a ExprNode),
    /// Combine the two most recent values with this node's operation.
    Apply(&'a ExprNode),
}

/// Evaluates `node` to a signed integer.
///
/// Addition, subtraction and multiplication wrap on overflow. Division
/// truncates toward zero and the remainder takes the sign of the dividend.
/// A zero right operand to `/` or `%` is a `DivisionByZero` error, and a
/// literal that is not a valid `i64` is `MalformedLiteral`.
///
/// Nodes built by the tree builder always have two children per operator.
/// A hand-built operator node missing a child fails with
/// `InvalidExpression { leftover: 0 }`.
///
/// The walk uses an explicit stack, so tree depth does not grow the call
/// stack. Left operands are evaluated before right ones.
pub fn evaluate(node: &ExprNode) -> Result<i64, Error> {
    let mut steps = vec![Step::Visit(node)];
    let mut values: Vec<i64> = vec![];

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(current) => match (current.operation, &current.left, &current.right) {
                (Operation::Literal, _, _) => values.push(evaluate_literal(current)?),
                (_, Some(left), Some(right)) => {
                    steps.push(Step::Apply(current));
                    steps.push(Step::Visit(right.as_ref()));
                    steps.push(Step::Visit(left.as_ref()));
                }
                _ => return Err(missing_operand(current)),
            },
            Step::Apply(current) => {
                let (Some(rhs), Some(lhs)) = (values.pop(), values.pop()) else {
                    return Err(missing_operand(current));
                };
                let value = apply(current, lhs, rhs)?;

                trace!(label = %current.label, value, "evaluated node");
                values.push(value);
            }
        }
    }

    values.pop().ok_or_else(|| missing_operand(node))
}

fn apply(node: &ExprNode, lhs: i64, rhs: i64) -> Result<i64, Error> {
    match node.operation {
        Operation::Add => Ok(lhs.wrapping_add(rhs)),
        Operation::Subtract => Ok(lhs.wrapping_sub(rhs)),
        Operation::Multiply => Ok(lhs.wrapping_mul(rhs)),
        Operation::Divide | Operation::Modulo if rhs == 0 => Err(Error::new(
            ErrorImpl::DivisionByZero {
                operator: node.label.clone(),
            },
            node.span.start.clone(),
        )),
        Operation::Divide => Ok(lhs.wrapping_div(rhs)),
        Operation::Modulo => Ok(lhs.wrapping_rem(rhs)),
        // Literals are resolved when visited and never scheduled to apply.
        Operation::Literal => evaluate_literal(node),
    }
}

fn evaluate_literal(node: &ExprNode) -> Result<i64, Error> {
    node.label.parse::<i64>().map_err(|_| {
        Error::new(
            ErrorImpl::MalformedLiteral {
                literal: node.label.clone(),
            },
            node.span.start.clone(),
        )
    })
}

fn missing_operand(node: &ExprNode) -> Error {
    Error::new(
        ErrorImpl::InvalidExpression { leftover: 0 },
        node.span.start.clone(),
    )
}

//! Tree-walking evaluation of expression nodes.
//!
//! Each node's [`Operation`](crate::ast::node::Operation) tag picks the
//! reduction rule. The walk keeps its own stack. Tree depth grows with
//! nesting and with the length of same-precedence chains (`1 + 1 + ... + 1`
//! is as deep as it has operators), so depth never bounds what can be
//! evaluated.

pub mod evaluator;

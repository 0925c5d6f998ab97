//! Parser module turning infix text into an expression tree.
//!
//! Parsing runs in two steps. The shunting-yard converter reorders the token
//! stream into postfix order using a fixed precedence table. The tree
//! builder then reduces that postfix sequence into an expression graph with
//! an operand stack.
//!
//! - `lookups`: operator precedence
//! - `postfix`: parenthesis validation and infix-to-postfix conversion
//! - `tree`: postfix-to-tree reduction
//! - `parser`: the parsing session that caches a postfix sequence

pub mod lookups;
pub mod parser;
pub mod postfix;
pub mod tree;

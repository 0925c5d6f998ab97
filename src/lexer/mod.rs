//! Lexical analysis for arithmetic expressions.
//!
//! The lexer turns source text into a lazy, pull-based stream of tokens:
//!
//! - Integer literals as maximal digit runs
//! - The binary operators `+ - * / %` and the grouping symbols `(` `)`
//! - Whitespace skipping
//! - `Unknown` tokens for anything else, and `EOF` once exhausted

pub mod lexer;
pub mod tokens;

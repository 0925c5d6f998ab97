//! Error types and error handling for the expression engine.
//!
//! This module defines the errors surfaced by each pipeline stage:
//!
//! - Error structures with source position information
//! - Specific error variants for parsing, tree building and evaluation
//! - Short suggestions used when rendering diagnostics

pub mod errors;

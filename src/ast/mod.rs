/// AST (Abstract Syntax Tree) module
/// Contains the expression graph built from a postfix sequence
///
/// Submodules:
/// - node: Expression nodes, their operation tags and shared child handles
pub mod node;

#[cfg(test)]
mod tests;

//! Grammar modules for Python parsing
//!
//! This module contains the parsing logic organized by construct:
//! - `expressions` - Expression parsing (operators, atoms, calls, parameters)
//! - `statements` - Statement parsing (definitions, blocks, imports, recovery)
//!
//! The parsing functions are generic over a trait (`ExpressionParser` / `StatementParser`)
//! so they can be used with any parser implementation.

pub mod expressions;
pub mod statements;

/// Deepest nesting of brackets, blocks and prefix operands the parser
/// follows before skipping the remainder as an `ERROR` node.
pub const MAX_NESTING_DEPTH: usize = 100;

pub use expressions::ExpressionParser;
pub use statements::{StatementParser, parse_statements};

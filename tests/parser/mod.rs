//! Parser layer tests
//!
//! Tests for the lexer and the recovering CST parser:
//! - Token classification and layout
//! - Lossless trees over every fixture
//! - Error recovery and diagnostics
//! - Typed AST accessors over realistic input

pub mod tests_ast;
pub mod tests_lexer;
pub mod tests_lossless;
pub mod tests_recovery;

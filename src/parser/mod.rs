//! Rowan-based parser for Python source
//!
//! This module provides a lossless, error-tolerant parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! This is the rust-analyzer approach: we build a lossless CST that preserves
//! all whitespace and comments, then extract an AST layer on top.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos + layout) → Tokens with SyntaxKind, INDENT/DEDENT
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//!     ↓
//! HIR → Symbols and the symbol graph
//! ```
//!
//! ## Error tolerance
//!
//! Parsing never fails. Malformed regions are wrapped in `ERROR` nodes,
//! every problem is reported as a [`SyntaxError`], and the text of the
//! root node always equals the input.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
pub mod grammar;
pub mod keywords;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use errors::{ErrorCode, ParseContext, RelatedInfo, Severity, SyntaxError};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, parse};
pub use syntax_kind::{
    PythonLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken,
};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};

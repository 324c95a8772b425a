//! Symbol extraction from AST: a single walk that returns symbols and edges.
//!
//! Extraction works directly with the typed AST wrapper types from
//! `crate::parser` (e.g., `FunctionDef`, `ClassDef`, `ImportFromStmt`),
//! producing `Symbol` and `Edge` values without any intermediate
//! representation.
//!
//! # Module structure
//!
//! - [`types`]: Public type definitions (Symbol, SymbolKind, Edge, etc.)
//! - [`context`]: ExtractionContext for tracking scopes and bindings
//! - [`helpers`]: AST → symbol attribute helpers
//! - [`extract`]: Entry point and statement dispatch
//! - [`extract_definition`]: Function, method and class extraction
//! - [`extract_leaf`]: Import and variable extraction

mod context;
mod extract;
mod extract_definition;
mod extract_leaf;
mod helpers;
mod types;


// Re-export all public types and functions
pub use types::{
    Edge, EdgeKind, EdgeRole, EdgeTarget, ExternalRef, ExtractionResult, ImportInfo, Symbol,
    SymbolFlags, SymbolId, SymbolKind,
};

pub use extract::extract_symbols;

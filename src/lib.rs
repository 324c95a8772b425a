//! # codeindex-base
//!
//! Structural extraction for Python: a fault-tolerant lexer and parser,
//! and a symbol graph built from the resulting tree.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! analysis  → Analyzer: text/bytes → FileAnalysis, parallel batches
//!   ↓
//! hir       → Symbol extraction, SymbolGraph, diagnostics, JSON export
//!   ↓
//! project   → ExtractorConfig, ChangeSet boundary type
//!   ↓
//! parser    → Logos lexer, layout, recursive-descent parser, typed AST
//!   ↓
//! base      → Primitives (TextRange, LineIndex, Span, extensions)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → project → hir → analysis)
// ============================================================================

/// Foundation types: TextRange, LineIndex, Span/Position
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, rowan CST, typed AST
pub mod parser;

/// Project inputs: extraction configuration, change sets
pub mod project;

/// High-level IR: symbols, edges, graph, diagnostics
pub mod hir;

/// Entry points running the whole pipeline
pub mod analysis;

// Re-export commonly needed items
pub use analysis::{AnalysisError, Analyzer, FileAnalysis, SourceInput};
pub use hir::{Diagnostic, FileRecord, Symbol, SymbolGraph, SymbolKind, SymbolResolver};
pub use parser::{Parse, keywords, parse};
pub use project::ExtractorConfig;

// Re-export foundation types
pub use base::{LineCol, LineIndex, Position, Span, TextRange, TextSize};

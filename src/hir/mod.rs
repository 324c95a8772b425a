//! High-level IR (HIR): symbols, edges and diagnostics extracted from the CST.
//!
//! ## Key Types
//!
//! - [`Symbol`]: A module, class, function, method, variable or import
//! - [`Edge`]: A relationship between symbols, possibly unresolved
//! - [`SymbolGraph`]: All symbols and edges of a file (or namespace)
//! - [`SymbolResolver`]: Hook for cross-file linking of unresolved edges
//! - [`Diagnostic`]: A located problem reported alongside the graph
//! - [`FileRecord`]: Serializable form of a graph and its diagnostics
//!
//! ## Layers
//!
//! ```text
//! SourceFile (typed AST)
//!     │
//!     ▼
//! extract_symbols(path, source, file, config)   ← single walk, scope stack
//!     │
//!     ▼
//! SymbolGraph::build(path, result)              ← Contains tree + indexes
//!     │
//!     ▼
//! graph.link(&resolver)                         ← optional, downstream
//!     │
//!     ▼
//! FileRecord::new(&graph, &diagnostics)         ← JSON export
//! ```

mod diagnostics;
mod export;
mod graph;
mod symbols;

pub use diagnostics::{Diagnostic, DiagnosticCollector, RelatedInfo, Severity, codes};
pub use export::{
    DiagnosticRecord, EdgeRecord, FileRecord, FlagsRecord, ImportRecord, PointRecord,
    SpanRecord, SymbolRecord,
};
pub use graph::{SymbolGraph, SymbolResolver};
pub use symbols::{
    Edge, EdgeKind, EdgeRole, EdgeTarget, ExternalRef, ExtractionResult, ImportInfo, Symbol,
    SymbolFlags, SymbolId, SymbolKind, extract_symbols,
};

//! Serializable records for a file's graph and diagnostics.
//!
//! The records are the structured output handed to a downstream index:
//! one record per symbol, edge and diagnostic, grouped per file.
//!
//! ```text
//! SymbolGraph + [Diagnostic] → FileRecord → JSON
//! ```
//!
//! Field names are camelCase and spans are 1-based `{line, col}` pairs.

use serde::{Deserialize, Serialize};

use crate::base::{Position, Span};

use super::diagnostics::Diagnostic;
use super::graph::SymbolGraph;
use super::symbols::{Edge, EdgeTarget, ImportInfo, Symbol, SymbolFlags};

// ============================================================================
// Spans
// ============================================================================

/// A 1-based line/column point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRecord {
    pub line: usize,
    pub col: usize,
}

/// A 1-based line/column range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanRecord {
    pub start: PointRecord,
    pub end: PointRecord,
}

impl From<Position> for PointRecord {
    fn from(position: Position) -> Self {
        let one_based = position.to_one_based();
        Self {
            line: one_based.line,
            col: one_based.column,
        }
    }
}

impl From<Span> for SpanRecord {
    fn from(span: Span) -> Self {
        Self {
            start: span.start.into(),
            end: span.end.into(),
        }
    }
}

// ============================================================================
// Symbols
// ============================================================================

/// Boolean attributes of a symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagsRecord {
    pub is_async: bool,
    pub is_generator: bool,
    pub is_static: bool,
    pub is_classmethod: bool,
    pub is_abstract: bool,
    pub is_property: bool,
    pub is_constructor: bool,
}

impl From<SymbolFlags> for FlagsRecord {
    fn from(flags: SymbolFlags) -> Self {
        Self {
            is_async: flags.is_async,
            is_generator: flags.is_generator,
            is_static: flags.is_static,
            is_classmethod: flags.is_classmethod,
            is_abstract: flags.is_abstract,
            is_property: flags.is_property,
            is_constructor: flags.is_constructor,
        }
    }
}

/// What an import symbol binds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    pub module: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_name: Option<String>,
    #[serde(default)]
    pub is_wildcard: bool,
}

impl From<&ImportInfo> for ImportRecord {
    fn from(info: &ImportInfo) -> Self {
        Self {
            module: info.module.to_string(),
            remote_name: info.remote_name.as_deref().map(str::to_string),
            is_wildcard: info.is_wildcard,
        }
    }
}

/// One symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolRecord {
    pub id: u32,
    pub kind: String,
    pub name: String,
    pub qualified_name: String,
    /// Qualified name, suffixed `#n` for the n-th redefinition
    pub moniker: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<u32>,
    pub span: SpanRecord,
    pub flags: FlagsRecord,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decorator_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub base_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docstring: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<ImportRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl SymbolRecord {
    pub fn new(symbol: &Symbol, moniker: String) -> Self {
        let strings = |items: &[std::sync::Arc<str>]| -> Vec<String> {
            items.iter().map(|item| item.to_string()).collect()
        };
        let text = |value: &Option<std::sync::Arc<str>>| value.as_deref().map(str::to_string);
        Self {
            id: symbol.id.0,
            kind: symbol.kind.as_str().to_string(),
            name: symbol.name.to_string(),
            qualified_name: symbol.qualified_name.to_string(),
            moniker,
            parent: symbol.parent.map(|parent| parent.0),
            span: symbol.span.into(),
            flags: symbol.flags.into(),
            decorator_refs: strings(&symbol.decorators),
            base_refs: strings(&symbol.bases),
            parameters: strings(&symbol.parameters),
            signature: text(&symbol.signature),
            annotation: text(&symbol.annotation),
            docstring: text(&symbol.docstring),
            comment: text(&symbol.comment),
            import: symbol.import.as_ref().map(ImportRecord::from),
            content: text(&symbol.content),
        }
    }
}

// ============================================================================
// Edges
// ============================================================================

/// One edge. Exactly one of `target` and `targetName` is set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRecord {
    pub source: u32,
    /// Target id, for targets inside this graph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    /// Target name, for unresolved and externally linked targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    /// File of an externally linked target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_path: Option<String>,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub resolved: bool,
}

impl From<&Edge> for EdgeRecord {
    fn from(edge: &Edge) -> Self {
        let (target, target_name, target_path) = match &edge.target {
            EdgeTarget::Symbol(id) => (Some(id.0), None, None),
            EdgeTarget::Unresolved(name) => (None, Some(name.to_string()), None),
            EdgeTarget::External(external) => (
                None,
                Some(external.qualified_name.to_string()),
                Some(external.path.to_string()),
            ),
        };
        Self {
            source: edge.source.0,
            target,
            target_name,
            target_path,
            kind: edge.kind.as_str().to_string(),
            role: edge.role.map(|role| role.as_str().to_string()),
            resolved: edge.is_resolved(),
        }
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// One diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecord {
    pub severity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
    /// How the parser recovered, when it did
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub span: SpanRecord,
}

impl From<&Diagnostic> for DiagnosticRecord {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            severity: diagnostic.severity.as_str().to_string(),
            code: diagnostic.code.as_deref().map(str::to_string),
            message: diagnostic.message.to_string(),
            hint: diagnostic.hint.as_deref().map(str::to_string),
            span: diagnostic.span.into(),
        }
    }
}

// ============================================================================
// Files
// ============================================================================

/// Everything extracted from one file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub path: String,
    pub module_name: String,
    #[serde(default)]
    pub symbols: Vec<SymbolRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
    #[serde(default)]
    pub diagnostics: Vec<DiagnosticRecord>,
}

impl FileRecord {
    /// Records for a graph and the diagnostics reported alongside it
    pub fn new(graph: &SymbolGraph, diagnostics: &[Diagnostic]) -> Self {
        let symbols = graph
            .symbols()
            .iter()
            .zip(graph.monikers())
            .map(|(symbol, moniker)| SymbolRecord::new(symbol, moniker))
            .collect();
        Self {
            path: graph.path().to_string(),
            module_name: graph.module_name().to_string(),
            symbols,
            edges: graph.edges().iter().map(EdgeRecord::from).collect(),
            diagnostics: diagnostics.iter().map(DiagnosticRecord::from).collect(),
        }
    }

    /// Records for a file whose content could not be decoded
    pub fn failed(path: impl Into<String>, diagnostics: &[Diagnostic]) -> Self {
        Self {
            path: path.into(),
            diagnostics: diagnostics.iter().map(DiagnosticRecord::from).collect(),
            ..Self::default()
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

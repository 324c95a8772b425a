//! Public type definitions for symbol extraction.
//!
//! Contains the symbol types (`Symbol`, `SymbolKind`, `SymbolFlags`), the
//! edge types shared with the graph, and the raw `ExtractionResult`.

use std::fmt;
use std::sync::Arc;

use rowan::TextRange;

use crate::base::Span;
use crate::hir::diagnostics::Diagnostic;

// ============================================================================
// IDS
// ============================================================================

/// Dense index of a symbol within one graph
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(pub u32);

impl SymbolId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// SYMBOLS
// ============================================================================

/// The kind of a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Module,
    Class,
    Function,
    /// A function defined directly in a class body
    Method,
    Variable,
    Import,
}

impl SymbolKind {
    /// Lowercase name used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Class => "class",
            Self::Function => "function",
            Self::Method => "method",
            Self::Variable => "variable",
            Self::Import => "import",
        }
    }

    /// Check whether this symbol opens a scope for nested symbols
    pub fn is_scope(&self) -> bool {
        matches!(self, Self::Module | Self::Class | Self::Function | Self::Method)
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function | Self::Method)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean properties of a symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SymbolFlags {
    /// Declared with `async def`
    pub is_async: bool,
    /// Contains `yield` in its own body
    pub is_generator: bool,
    /// Decorated with a static-method decorator
    pub is_static: bool,
    /// Decorated with a class-method decorator
    pub is_classmethod: bool,
    /// Abstract method, or a class with an abstract base, metaclass or method
    pub is_abstract: bool,
    /// Decorated with a property decorator
    pub is_property: bool,
    /// The instance constructor (`__init__`)
    pub is_constructor: bool,
}

/// What an import symbol binds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImportInfo {
    /// Module path as written, dotted or relative (`..pkg.mod`)
    pub module: Arc<str>,
    /// Imported name for `from m import name`; `None` for `import m`
    pub remote_name: Option<Arc<str>>,
    /// `from m import *`
    pub is_wildcard: bool,
}

impl ImportInfo {
    /// Fully qualified imported target (`module.name` or `module`)
    pub fn target(&self) -> String {
        match (&self.remote_name, self.is_wildcard) {
            (Some(name), false) if self.module.ends_with('.') => format!("{}{}", self.module, name),
            (Some(name), false) => format!("{}.{}", self.module, name),
            _ => self.module.to_string(),
        }
    }
}

/// A symbol extracted from source.
///
/// Created once per declaring construct; never mutated after extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub id: SymbolId,
    pub kind: SymbolKind,
    /// The local (unqualified) name
    pub name: Arc<str>,
    /// Dot-joined path from the module root
    pub qualified_name: Arc<str>,
    /// The file that declares this symbol
    pub path: Arc<str>,
    /// Containing symbol; `None` only for the module root
    pub parent: Option<SymbolId>,
    /// Byte range of the declaration, decorators included
    pub range: TextRange,
    /// 0-based line/column span of `range`
    pub span: Span,
    pub flags: SymbolFlags,
    /// Decorator references in source order
    pub decorators: Vec<Arc<str>>,
    /// Base class references in declaration order
    pub bases: Vec<Arc<str>>,
    pub docstring: Option<Arc<str>>,
    /// `#` comment lines directly above the declaration
    pub comment: Option<Arc<str>>,
    /// Parameter names, variadics prefixed with `*` / `**`
    pub parameters: Vec<Arc<str>>,
    /// Normalized header text (`def f(a, b) -> int`)
    pub signature: Option<Arc<str>>,
    /// Type annotation of an annotated variable
    pub annotation: Option<Arc<str>>,
    pub import: Option<ImportInfo>,
    /// Declaration source text, when requested by the configuration
    pub content: Option<Arc<str>>,
}

impl Symbol {
    /// Create a symbol with no attributes beyond its identity and location
    pub fn new(
        id: SymbolId,
        kind: SymbolKind,
        name: impl Into<Arc<str>>,
        qualified_name: impl Into<Arc<str>>,
        path: Arc<str>,
        range: TextRange,
        span: Span,
    ) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            qualified_name: qualified_name.into(),
            path,
            parent: None,
            range,
            span,
            flags: SymbolFlags::default(),
            decorators: Vec::new(),
            bases: Vec::new(),
            docstring: None,
            comment: None,
            parameters: Vec::new(),
            signature: None,
            annotation: None,
            import: None,
            content: None,
        }
    }
}

// ============================================================================
// EDGES
// ============================================================================

/// Relationship kind between two symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Parent scope contains child declaration
    Contains,
    /// Class lists the target as a base
    Inherits,
    /// Decorator or metaclass applied to the source
    Decorates,
    /// Import symbol refers to a module or a name in it
    Imports,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::Inherits => "inherits",
            Self::Decorates => "decorates",
            Self::Imports => "imports",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distinguishes the two flavors of `Decorates` edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeRole {
    Decorator,
    Metaclass,
}

impl EdgeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decorator => "decorator",
            Self::Metaclass => "metaclass",
        }
    }
}

/// A symbol living outside the current file, found by a resolver.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExternalRef {
    pub path: Arc<str>,
    pub qualified_name: Arc<str>,
}

impl ExternalRef {
    pub fn new(path: impl Into<Arc<str>>, qualified_name: impl Into<Arc<str>>) -> Self {
        Self {
            path: path.into(),
            qualified_name: qualified_name.into(),
        }
    }
}

/// Where an edge points.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EdgeTarget {
    /// A symbol in the same graph
    Symbol(SymbolId),
    /// A textual name awaiting cross-file resolution
    Unresolved(Arc<str>),
    /// A symbol in another file, filled in by a resolver
    External(ExternalRef),
}

impl EdgeTarget {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved(_))
    }

    /// The textual name of an unresolved target
    pub fn unresolved_name(&self) -> Option<&str> {
        match self {
            Self::Unresolved(name) => Some(name),
            _ => None,
        }
    }
}

/// A directed relationship between symbols.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: SymbolId,
    pub target: EdgeTarget,
    pub kind: EdgeKind,
    pub role: Option<EdgeRole>,
    /// Range of the reference that produced the edge
    pub range: TextRange,
}

impl Edge {
    pub fn new(source: SymbolId, target: EdgeTarget, kind: EdgeKind, range: TextRange) -> Self {
        Self {
            source,
            target,
            kind,
            role: None,
            range,
        }
    }

    pub fn with_role(mut self, role: EdgeRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn is_resolved(&self) -> bool {
        self.target.is_resolved()
    }
}

// ============================================================================
// RESULT
// ============================================================================

/// Raw output of one extraction pass.
///
/// Symbols are in declaration order; the first is always the module.
/// Containment is recorded through `Symbol::parent` and becomes
/// `Contains` edges when the graph is built.
#[derive(Clone, Debug, Default)]
pub struct ExtractionResult {
    pub symbols: Vec<Symbol>,
    pub edges: Vec<Edge>,
    pub diagnostics: Vec<Diagnostic>,
}

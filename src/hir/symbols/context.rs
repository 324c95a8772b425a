//! Extraction context: tracks scopes, bindings and output during extraction.

use std::sync::Arc;

use rowan::TextRange;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::{LineIndex, Span};
use crate::hir::diagnostics::Diagnostic;
use crate::project::ExtractorConfig;

use super::types::{Edge, ExtractionResult, Symbol, SymbolId, SymbolKind};

/// One lexical scope on the stack.
pub(super) struct Scope {
    pub symbol: SymbolId,
    pub kind: SymbolKind,
    pub qualified_name: Arc<str>,
    /// Names bound so far in this scope, latest binding wins
    pub bindings: FxHashMap<SmolStr, SymbolId>,
}

/// Extraction state passed through all extraction functions.
pub(super) struct ExtractionContext<'a> {
    pub path: Arc<str>,
    pub source: &'a str,
    pub config: &'a ExtractorConfig,
    /// Line index for converting byte offsets to line/column
    pub line_index: LineIndex,
    /// Stack of open scopes, the module at the bottom
    pub scope_stack: Vec<Scope>,
    /// Member bindings of every closed class, for dotted lookups
    pub class_members: FxHashMap<SymbolId, FxHashMap<SmolStr, SymbolId>>,
    pub result: ExtractionResult,
}

impl<'a> ExtractionContext<'a> {
    pub fn new(path: Arc<str>, source: &'a str, config: &'a ExtractorConfig) -> Self {
        Self {
            path,
            source,
            config,
            line_index: LineIndex::new(source),
            scope_stack: Vec::new(),
            class_members: FxHashMap::default(),
            result: ExtractionResult::default(),
        }
    }

    pub fn qualified_name(&self, name: &str) -> String {
        match self.scope_stack.last() {
            Some(scope) if !scope.qualified_name.is_empty() => {
                format!("{}.{}", scope.qualified_name, name)
            }
            _ => name.to_string(),
        }
    }

    /// The innermost scope's symbol
    pub fn current_scope(&self) -> Option<SymbolId> {
        self.scope_stack.last().map(|scope| scope.symbol)
    }

    /// Kind of the innermost scope
    pub fn scope_kind(&self) -> SymbolKind {
        self.scope_stack
            .last()
            .map_or(SymbolKind::Module, |scope| scope.kind)
    }

    pub fn push_scope(&mut self, id: SymbolId) {
        let symbol = &self.result.symbols[id.index()];
        self.scope_stack.push(Scope {
            symbol: id,
            kind: symbol.kind,
            qualified_name: symbol.qualified_name.clone(),
            bindings: FxHashMap::default(),
        });
    }

    pub fn pop_scope(&mut self) {
        let Some(scope) = self.scope_stack.pop() else {
            return;
        };
        if scope.kind == SymbolKind::Class {
            self.class_members.insert(scope.symbol, scope.bindings);
        }
    }

    /// Bind a name in the innermost scope
    pub fn bind(&mut self, name: &str, id: SymbolId) {
        if let Some(scope) = self.scope_stack.last_mut() {
            scope.bindings.insert(SmolStr::new(name), id);
        }
    }

    /// Look a name up through the visible scopes.
    ///
    /// Class bodies are only visible from the class itself, never from
    /// functions or classes nested inside it.
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        let innermost = self.scope_stack.len().checked_sub(1)?;
        self.scope_stack
            .iter()
            .enumerate()
            .rev()
            .filter(|(depth, scope)| *depth == innermost || scope.kind != SymbolKind::Class)
            .find_map(|(_, scope)| scope.bindings.get(name).copied())
    }

    /// Resolve a dotted name (`Outer.Inner`) to a class defined in this file
    pub fn resolve_class(&self, path: &str) -> Option<SymbolId> {
        let mut segments = path.split('.');
        let mut id = self.lookup(segments.next()?)?;
        for segment in segments {
            id = *self.class_members.get(&id)?.get(segment)?;
        }
        (self.result.symbols[id.index()].kind == SymbolKind::Class).then_some(id)
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Allocate a symbol in the current scope and return it for filling in
    pub fn new_symbol(&self, kind: SymbolKind, name: &str, range: TextRange) -> Symbol {
        let id = SymbolId::new(self.result.symbols.len());
        let mut symbol = Symbol::new(
            id,
            kind,
            name,
            self.qualified_name(name),
            self.path.clone(),
            range,
            self.span(range),
        );
        symbol.parent = self.current_scope();
        if self.config.include_content {
            symbol.content = Some(Arc::from(&self.source[range]));
        }
        symbol
    }

    /// Store a finished symbol and bind its name in the current scope
    pub fn add_symbol(&mut self, symbol: Symbol) -> SymbolId {
        let id = symbol.id;
        tracing::trace!(qualified_name = %symbol.qualified_name, kind = %symbol.kind, "extracted symbol");
        let name = symbol.name.clone();
        self.result.symbols.push(symbol);
        if name.as_ref() != "*" {
            self.bind(&name, id);
        }
        id
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.result.edges.push(edge);
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.result.diagnostics.push(diagnostic);
    }

    /// Convert a TextRange to a 0-based span using the line index
    pub fn span(&self, range: TextRange) -> Span {
        self.line_index.span(range)
    }
}

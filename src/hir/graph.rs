//! Symbol graph: the per-file (or per-namespace) container of symbols and edges.
//!
//! The graph owns every [`Symbol`] extracted from a file. Containment is
//! materialized as `Contains` edges derived from each symbol's parent, so
//! the Contains edges always form a tree rooted at the module.
//!
//! Inherits, Decorates and Imports edges may point at names that are not
//! defined in the file. Those stay [`EdgeTarget::Unresolved`] until a
//! downstream linker supplies a [`SymbolResolver`].

use std::sync::Arc;

use indexmap::IndexMap;
use rowan::TextRange;
use rustc_hash::FxHashMap;

use crate::base::Span;

use super::symbols::{
    Edge, EdgeKind, EdgeTarget, ExternalRef, ExtractionResult, Symbol, SymbolId, SymbolKind,
};

// ============================================================================
// RESOLUTION HOOK
// ============================================================================

/// Cross-file resolution hook for unresolved edge targets.
///
/// Implemented for closures, so a linker can pass
/// `|name: &str| index.get(name).cloned()`.
pub trait SymbolResolver {
    fn resolve(&self, name: &str) -> Option<ExternalRef>;
}

impl<F> SymbolResolver for F
where
    F: Fn(&str) -> Option<ExternalRef>,
{
    fn resolve(&self, name: &str) -> Option<ExternalRef> {
        self(name)
    }
}

/// A graph resolves names against its own qualified-name index.
impl SymbolResolver for SymbolGraph {
    fn resolve(&self, name: &str) -> Option<ExternalRef> {
        let id = *self.by_qualified_name(name).first()?;
        let symbol = self.symbol(id)?;
        Some(ExternalRef::new(
            symbol.path.clone(),
            symbol.qualified_name.clone(),
        ))
    }
}

// ============================================================================
// GRAPH
// ============================================================================

/// Symbols and edges of one file, or of several merged into a namespace.
#[derive(Clone, Debug)]
pub struct SymbolGraph {
    path: Arc<str>,
    module_name: Arc<str>,
    /// Dense: `symbols[i].id == SymbolId(i)`, parents precede children
    symbols: Vec<Symbol>,
    edges: Vec<Edge>,
    children: Vec<Vec<SymbolId>>,
    /// Edge indices per source symbol
    outgoing: Vec<Vec<usize>>,
    /// Qualified name -> symbols (IndexMap keeps declaration order)
    by_qualified_name: IndexMap<Arc<str>, Vec<SymbolId>>,
}

impl SymbolGraph {
    /// Build the graph of one file from its extraction result.
    ///
    /// Diagnostics in the result are left to the caller.
    pub fn build(path: impl Into<Arc<str>>, result: ExtractionResult) -> Self {
        let module_name = result
            .symbols
            .first()
            .map(|root| root.qualified_name.clone())
            .unwrap_or_else(|| Arc::from(""));
        Self::assemble(path.into(), module_name, result.symbols, result.edges)
    }

    /// Index the symbols and derive Contains edges from parent links.
    ///
    /// `edges` must not contain Contains edges already.
    fn assemble(
        path: Arc<str>,
        module_name: Arc<str>,
        symbols: Vec<Symbol>,
        relations: Vec<Edge>,
    ) -> Self {
        let mut edges = Vec::with_capacity(symbols.len() + relations.len());
        let mut children = vec![Vec::new(); symbols.len()];
        let mut by_qualified_name: IndexMap<Arc<str>, Vec<SymbolId>> = IndexMap::new();

        for symbol in &symbols {
            if let Some(parent) = symbol.parent {
                children[parent.index()].push(symbol.id);
                edges.push(Edge::new(
                    parent,
                    EdgeTarget::Symbol(symbol.id),
                    EdgeKind::Contains,
                    symbol.range,
                ));
            }
            by_qualified_name
                .entry(symbol.qualified_name.clone())
                .or_default()
                .push(symbol.id);
        }
        edges.extend(relations);

        let mut outgoing = vec![Vec::new(); symbols.len()];
        for (index, edge) in edges.iter().enumerate() {
            outgoing[edge.source.index()].push(index);
        }

        tracing::debug!(
            path = %path,
            symbols = symbols.len(),
            edges = edges.len(),
            "built symbol graph"
        );
        Self {
            path,
            module_name,
            symbols,
            edges,
            children,
            outgoing,
            by_qualified_name,
        }
    }

    /// Combine per-file graphs into one graph under a synthetic package root.
    ///
    /// Each file's module becomes a child of the root. Ids are renumbered;
    /// intra-file targets follow their symbols. Qualified names are kept,
    /// since module names already come from the files' relative paths.
    pub fn merge(package_name: &str, graphs: impl IntoIterator<Item = SymbolGraph>) -> Self {
        let root_id = SymbolId::new(0);
        let root = Symbol::new(
            root_id,
            SymbolKind::Module,
            package_name,
            package_name,
            Arc::from(""),
            TextRange::default(),
            Span::default(),
        );
        let mut symbols = vec![root];
        let mut relations = Vec::new();

        for graph in graphs {
            let offset = symbols.len();
            let remap = |id: SymbolId| SymbolId::new(id.index() + offset);
            for mut symbol in graph.symbols {
                symbol.id = remap(symbol.id);
                symbol.parent = Some(symbol.parent.map_or(root_id, remap));
                symbols.push(symbol);
            }
            for mut edge in graph.edges {
                if edge.kind == EdgeKind::Contains {
                    continue;
                }
                edge.source = remap(edge.source);
                if let EdgeTarget::Symbol(target) = edge.target {
                    edge.target = EdgeTarget::Symbol(remap(target));
                }
                relations.push(edge);
            }
        }

        Self::assemble(Arc::from(""), Arc::from(package_name), symbols, relations)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Source path, empty for a merged graph
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Qualified name of the root module
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// The root module symbol
    pub fn root(&self) -> Option<&Symbol> {
        self.symbols.first()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index())
    }

    /// Directly contained symbols, in declaration order
    pub fn children(&self, id: SymbolId) -> &[SymbolId] {
        self.children
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The containing symbol, `None` for the root
    pub fn parent(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbol(self.symbol(id)?.parent?)
    }

    /// Outgoing edges of a symbol, Contains edges first
    pub fn edges_from(&self, id: SymbolId) -> impl Iterator<Item = &Edge> {
        self.outgoing
            .get(id.index())
            .into_iter()
            .flatten()
            .map(|&index| &self.edges[index])
    }

    /// All symbols sharing a qualified name, in declaration order
    pub fn by_qualified_name(&self, name: &str) -> &[SymbolId] {
        self.by_qualified_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Edges whose target is still a bare name
    pub fn unresolved_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|edge| !edge.is_resolved())
    }

    /// Stable key per symbol, aligned with [`symbols`](Self::symbols).
    ///
    /// The first symbol with a qualified name gets the name itself, the
    /// n-th redefinition gets `name#n`.
    pub fn monikers(&self) -> Vec<String> {
        let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
        self.symbols
            .iter()
            .map(|symbol| {
                let count = seen.entry(symbol.qualified_name.as_ref()).or_insert(0);
                let moniker = match *count {
                    0 => symbol.qualified_name.to_string(),
                    n => format!("{}#{n}", symbol.qualified_name),
                };
                *count += 1;
                moniker
            })
            .collect()
    }

    // ========================================================================
    // Linking
    // ========================================================================

    /// Resolve unresolved targets through `resolver`.
    ///
    /// Returns the number of edges resolved by this call. Names the
    /// resolver does not know stay unresolved.
    pub fn link(&mut self, resolver: &impl SymbolResolver) -> usize {
        let mut resolved = 0;
        for edge in &mut self.edges {
            let Some(name) = edge.target.unresolved_name() else {
                continue;
            };
            if let Some(external) = resolver.resolve(name) {
                tracing::trace!(name, target = %external.qualified_name, "linked edge");
                edge.target = EdgeTarget::External(external);
                resolved += 1;
            }
        }
        tracing::debug!(path = %self.path, resolved, "linked unresolved edges");
        resolved
    }
}

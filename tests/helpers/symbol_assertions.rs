//! Symbol assertion helpers for graph tests.

use codeindex::hir::{EdgeKind, EdgeTarget, Symbol, SymbolGraph, SymbolKind};

/// Assert a symbol exists and return the first one with that name.
pub fn get_symbol<'a>(graph: &'a SymbolGraph, qname: &str) -> &'a Symbol {
    let id = graph
        .by_qualified_name(qname)
        .first()
        .copied()
        .unwrap_or_else(|| panic!("Expected symbol '{qname}' to exist"));
    graph.symbol(id).unwrap()
}

/// Assert a symbol exists with the given kind.
pub fn assert_symbol_kind(graph: &SymbolGraph, qname: &str, expected: SymbolKind) {
    let symbol = get_symbol(graph, qname);
    assert_eq!(
        symbol.kind, expected,
        "Expected symbol '{}' to have kind {:?}, got {:?}",
        qname, expected, symbol.kind
    );
}

/// Qualified names of a symbol's direct children.
pub fn child_names(graph: &SymbolGraph, qname: &str) -> Vec<String> {
    let symbol = get_symbol(graph, qname);
    graph
        .children(symbol.id)
        .iter()
        .map(|&id| graph.symbol(id).unwrap().name.to_string())
        .collect()
}

/// Edge targets of one kind from a symbol, rendered as text.
///
/// Resolved targets render as the target's qualified name.
pub fn edge_targets(graph: &SymbolGraph, qname: &str, kind: EdgeKind) -> Vec<String> {
    let symbol = get_symbol(graph, qname);
    graph
        .edges_from(symbol.id)
        .filter(|e| e.kind == kind)
        .map(|e| match &e.target {
            EdgeTarget::Symbol(id) => graph.symbol(*id).unwrap().qualified_name.to_string(),
            EdgeTarget::Unresolved(name) => name.to_string(),
            EdgeTarget::External(external) => external.qualified_name.to_string(),
        })
        .collect()
}

/// Assert that every symbol's span lies within its parent's span.
pub fn assert_spans_nested(graph: &SymbolGraph) {
    for symbol in graph.symbols() {
        if let Some(parent) = graph.parent(symbol.id) {
            assert!(
                parent.span.contains_span(&symbol.span),
                "'{}' ({:?}) escapes '{}' ({:?})",
                symbol.qualified_name,
                symbol.span,
                parent.qualified_name,
                parent.span
            );
        }
    }
}

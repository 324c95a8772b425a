//! Leaf extractors: imports and variables.

use std::sync::Arc;

use crate::parser::{AstNode, Assignment, ImportFromStmt, ImportStmt};

use super::context::ExtractionContext;
use super::helpers::{bound_names, comment_of};
use super::types::{Edge, EdgeKind, EdgeTarget, ImportInfo, SymbolKind};

/// `import a.b as c, d`: one Import symbol per bound name.
///
/// Without an alias, `import a.b` binds `a` but records the full module
/// path `a.b`.
pub(super) fn extract_import(ctx: &mut ExtractionContext, import: &ImportStmt) {
    for alias in import.aliases() {
        let Some(module) = alias.path() else {
            continue;
        };
        let local = match alias.alias().and_then(|a| a.text()) {
            Some(name) => name.to_string(),
            None => module.split('.').next().unwrap_or(&module).to_string(),
        };
        let info = ImportInfo {
            module: module.as_str().into(),
            remote_name: None,
            is_wildcard: false,
        };
        add_import(ctx, &local, info, alias.significant_range());
    }
}

/// `from m import a, b as c`: one Import symbol per bound name.
///
/// A wildcard import yields a single symbol named `*`.
pub(super) fn extract_import_from(ctx: &mut ExtractionContext, import: &ImportFromStmt) {
    let module: Arc<str> = import.module_path().into();

    if import.is_wildcard() {
        let info = ImportInfo {
            module,
            remote_name: None,
            is_wildcard: true,
        };
        add_import(ctx, "*", info, import.significant_range());
        return;
    }

    for alias in import.aliases() {
        let Some(remote) = alias.name().and_then(|n| n.text()) else {
            continue;
        };
        let local = alias
            .alias()
            .and_then(|a| a.text())
            .unwrap_or_else(|| remote.clone());
        let info = ImportInfo {
            module: module.clone(),
            remote_name: Some(remote.as_str().into()),
            is_wildcard: false,
        };
        add_import(ctx, &local, info, alias.significant_range());
    }
}

fn add_import(ctx: &mut ExtractionContext, local: &str, info: ImportInfo, range: rowan::TextRange) {
    let target = info.target();
    let mut symbol = ctx.new_symbol(SymbolKind::Import, local, range);
    symbol.import = Some(info);
    let id = ctx.add_symbol(symbol);
    ctx.add_edge(Edge::new(
        id,
        EdgeTarget::Unresolved(target.into()),
        EdgeKind::Imports,
        range,
    ));
}

/// Assignments to bare names become Variable symbols.
///
/// Inside function bodies this only happens when the configuration asks
/// for local variables. Every name of a chained or unpacking assignment
/// gets its own symbol spanning the whole statement.
pub(super) fn extract_assignment(ctx: &mut ExtractionContext, assign: &Assignment) {
    if ctx.scope_kind().is_callable() && !ctx.config.record_local_variables {
        return;
    }

    let mut names = Vec::new();
    for target in assign.targets() {
        bound_names(&target, &mut names);
    }
    if names.is_empty() {
        return;
    }

    let range = assign.significant_range();
    let annotation: Option<Arc<str>> = assign.annotation().map(|a| a.text().into());
    let comment = comment_of(ctx, assign);
    for name in names {
        let mut symbol = ctx.new_symbol(SymbolKind::Variable, &name, range);
        symbol.annotation = annotation.clone();
        symbol.comment = comment.clone();
        ctx.add_symbol(symbol);
    }
}

//! Extraction entry point and statement dispatch.

use std::sync::Arc;

use rowan::{TextRange, TextSize};

use crate::base::constants::module_name_from_path;
use crate::hir::diagnostics::{Diagnostic, codes};
use crate::parser::{AstNode, Block, ErrorNode, SourceFile, Statement};
use crate::project::ExtractorConfig;

use super::context::ExtractionContext;
use super::extract_definition::{extract_class, extract_function};
use super::extract_leaf::{extract_assignment, extract_import, extract_import_from};
use super::helpers::contains_definitions;
use super::types::{ExtractionResult, Symbol, SymbolId, SymbolKind};

/// Extract all symbols and edges from a parsed source file.
///
/// The first symbol is always the module, named after `path` and
/// spanning the whole of `source`. Containment is recorded through each
/// symbol's `parent`; the graph builder turns it into edges.
pub fn extract_symbols(
    path: &str,
    source: &str,
    file: &SourceFile,
    config: &ExtractorConfig,
) -> ExtractionResult {
    let mut ctx = ExtractionContext::new(Arc::from(path), source, config);

    let module_name = module_name_from_path(path);
    let local_name = module_name.rsplit('.').next().unwrap_or(&module_name);
    let range = TextRange::up_to(TextSize::of(source));
    let mut module = Symbol::new(
        SymbolId::new(0),
        SymbolKind::Module,
        local_name,
        module_name.as_str(),
        ctx.path.clone(),
        range,
        ctx.span(range),
    );
    module.docstring = file.docstring().map(Arc::from);
    let module_id = ctx.add_symbol(module);

    ctx.push_scope(module_id);
    for statement in file.statements() {
        extract_statement(&mut ctx, &statement);
    }
    ctx.pop_scope();

    tracing::debug!(
        path,
        symbols = ctx.result.symbols.len(),
        edges = ctx.result.edges.len(),
        "extracted symbols"
    );
    ctx.result
}

/// Dispatch extraction for a single statement.
///
/// Compound statements do not open scopes: their blocks are walked as
/// part of the enclosing body.
pub(super) fn extract_statement(ctx: &mut ExtractionContext, statement: &Statement) {
    match statement {
        Statement::FunctionDef(func) => extract_function(ctx, func),
        Statement::ClassDef(class) => extract_class(ctx, class),
        Statement::Import(import) => extract_import(ctx, import),
        Statement::ImportFrom(import) => extract_import_from(ctx, import),
        Statement::Assignment(assign) => extract_assignment(ctx, assign),
        Statement::Compound(compound) => {
            for block in compound.blocks() {
                extract_block(ctx, &block);
            }
        }
        Statement::Block(block) => extract_block(ctx, block),
        Statement::Error(error) => extract_salvaged(ctx, error),
        Statement::ExprStmt(_) | Statement::Other(_) => {}
    }
}

/// Extract every statement of a block in the current scope
pub(super) fn extract_block(ctx: &mut ExtractionContext, block: &Block) {
    for statement in block.statements() {
        extract_statement(ctx, &statement);
    }
}

/// Extract the bodies kept inside a malformed statement.
///
/// The broken header yields no symbol; definitions in its body are
/// attached to the enclosing scope and noted with a diagnostic.
fn extract_salvaged(ctx: &mut ExtractionContext, error: &ErrorNode) {
    let blocks: Vec<Block> = error.blocks().collect();
    if blocks.is_empty() {
        return;
    }
    if blocks.iter().any(|block| contains_definitions(block.syntax())) {
        let range = error.significant_range();
        let diagnostic = Diagnostic::info(
            ctx.path.clone(),
            range,
            ctx.span(range),
            "definitions inside a malformed statement are attached to the enclosing scope",
        )
        .with_code(codes::SALVAGED_DEFINITIONS);
        ctx.add_diagnostic(diagnostic);
    }
    for block in &blocks {
        extract_block(ctx, block);
    }
}

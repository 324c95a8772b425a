//! Function and class extraction.

use std::sync::Arc;

use rowan::TextRange;

use crate::base::constants::CONSTRUCTOR_NAME;
use crate::hir::diagnostics::{Diagnostic, codes};
use crate::parser::{AstNode, Block, ClassDef, Decorator, FunctionDef};

use super::context::ExtractionContext;
use super::extract::extract_block;
use super::helpers::{class_target, comment_of, expr_reference, has_abstract_method};
use super::types::{Edge, EdgeKind, EdgeRole, EdgeTarget, SymbolId, SymbolKind};

/// Extract a function or method and everything declared in its body.
pub(super) fn extract_function(ctx: &mut ExtractionContext, func: &FunctionDef) {
    let Some(name) = func.name().and_then(|n| n.text()) else {
        skip_unnamed(ctx, func, func.body(), "function");
        return;
    };

    let in_class = ctx.scope_kind() == SymbolKind::Class;
    let kind = if in_class {
        SymbolKind::Method
    } else {
        SymbolKind::Function
    };
    let mut symbol = ctx.new_symbol(kind, &name, func.significant_range());
    symbol.flags.is_async = func.is_async();
    symbol.flags.is_generator = func.is_generator();
    symbol.flags.is_constructor = in_class && name == CONSTRUCTOR_NAME;

    // staticmethod/classmethod only set flags; every other decorator is an edge
    let config = ctx.config;
    let mut decorator_refs = Vec::new();
    for decorator in func.decorators() {
        let reference = decorator.reference();
        if reference.is_empty() {
            continue;
        }
        if in_class && config.is_static_method(&reference) {
            symbol.flags.is_static = true;
        } else if in_class && config.is_class_method(&reference) {
            symbol.flags.is_classmethod = true;
        } else {
            symbol.flags.is_abstract |= config.is_abstract_method(&reference);
            symbol.flags.is_property |= config.is_property(&reference);
            decorator_refs.push((reference.clone(), decorator.significant_range()));
        }
        symbol.decorators.push(reference.into());
    }

    if let Some(params) = func.param_list() {
        symbol.parameters = params
            .params()
            .filter_map(|p| p.display_name())
            .map(Arc::from)
            .collect();
    }
    symbol.signature = Some(func.signature().into());
    symbol.docstring = func.body().and_then(|b| b.docstring()).map(Arc::from);
    symbol.comment = comment_of(ctx, func);

    let id = ctx.add_symbol(symbol);
    add_decorator_edges(ctx, id, decorator_refs);
    extract_body(ctx, id, func.body());
}

/// Extract a class, its relationship edges and its body.
pub(super) fn extract_class(ctx: &mut ExtractionContext, class: &ClassDef) {
    let Some(name) = class.name().and_then(|n| n.text()) else {
        skip_unnamed(ctx, class, class.body(), "class");
        return;
    };

    let config = ctx.config;
    let mut symbol = ctx.new_symbol(SymbolKind::Class, &name, class.significant_range());

    // Targets resolve before the class binds its own name: in
    // `class A(A)` the base is the earlier `A`.
    let bases: Vec<(String, TextRange, EdgeTarget)> = class
        .bases()
        .iter()
        .map(|base| {
            let reference = expr_reference(base);
            let target = class_target(ctx, &reference);
            (reference, base.significant_range(), target)
        })
        .collect();
    let metaclass = class.metaclass().map(|meta| {
        let reference = expr_reference(&meta);
        let target = class_target(ctx, &reference);
        (reference, meta.significant_range(), target)
    });

    let decorators: Vec<Decorator> = class.decorators().collect();
    let decorator_refs: Vec<(String, TextRange)> = decorators
        .iter()
        .map(|d| (d.reference(), d.significant_range()))
        .filter(|(reference, _)| !reference.is_empty())
        .collect();

    symbol.bases = bases.iter().map(|(r, _, _)| Arc::from(r.as_str())).collect();
    symbol.decorators = decorator_refs
        .iter()
        .map(|(r, _)| Arc::from(r.as_str()))
        .collect();
    symbol.flags.is_abstract = bases.iter().any(|(r, _, _)| config.is_abstract_base(r))
        || metaclass
            .as_ref()
            .is_some_and(|(r, _, _)| config.is_abstract_base(r))
        || class
            .body()
            .is_some_and(|body| has_abstract_method(&body, config));
    symbol.signature = Some(class.signature().into());
    symbol.docstring = class.body().and_then(|b| b.docstring()).map(Arc::from);
    symbol.comment = comment_of(ctx, class);

    let id = ctx.add_symbol(symbol);
    for (_, range, target) in bases {
        ctx.add_edge(Edge::new(id, target, EdgeKind::Inherits, range));
    }
    if let Some((_, range, target)) = metaclass {
        ctx.add_edge(Edge::new(id, target, EdgeKind::Decorates, range).with_role(EdgeRole::Metaclass));
    }
    add_decorator_edges(ctx, id, decorator_refs);
    extract_body(ctx, id, class.body());
}

/// Decorators stay unresolved: their identity is not known statically
fn add_decorator_edges(ctx: &mut ExtractionContext, id: SymbolId, refs: Vec<(String, TextRange)>) {
    for (reference, range) in refs {
        let edge = Edge::new(
            id,
            EdgeTarget::Unresolved(reference.into()),
            EdgeKind::Decorates,
            range,
        )
        .with_role(EdgeRole::Decorator);
        ctx.add_edge(edge);
    }
}

fn extract_body(ctx: &mut ExtractionContext, id: SymbolId, body: Option<Block>) {
    let Some(body) = body else {
        return;
    };
    ctx.push_scope(id);
    extract_block(ctx, &body);
    ctx.pop_scope();
}

/// A definition whose name is missing yields no symbol.
///
/// Its body is still walked in the enclosing scope.
fn skip_unnamed(ctx: &mut ExtractionContext, node: &impl AstNode, body: Option<Block>, what: &str) {
    let range = node.significant_range();
    tracing::debug!(?range, what, "skipping unnamed definition");
    let diagnostic = Diagnostic::info(
        ctx.path.clone(),
        range,
        ctx.span(range),
        format!("{what} definition without a name produces no symbol"),
    )
    .with_code(codes::UNNAMED_DEFINITION);
    ctx.add_diagnostic(diagnostic);
    if let Some(body) = body {
        extract_block(ctx, &body);
    }
}

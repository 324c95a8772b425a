//! AST → symbol attribute helpers.

use smol_str::SmolStr;

use crate::parser::{AstNode, Block, Expr, Statement, SyntaxKind, SyntaxNode};
use crate::project::ExtractorConfig;

use super::context::ExtractionContext;
use super::types::EdgeTarget;

/// Reference text of an expression used as a base, decorator or metaclass.
///
/// Name and attribute chains give their dotted path; anything else
/// (`Generic[T]`, `make_base()`) gives its normalized source text.
pub(super) fn expr_reference(expr: &Expr) -> String {
    match expr.kind() {
        SyntaxKind::NAME_REF | SyntaxKind::ATTR_EXPR => expr
            .dotted_path()
            .unwrap_or_else(|| expr.normalized_text()),
        _ => expr.normalized_text(),
    }
}

/// Target for a class reference: a class in this file, else the name
pub(super) fn class_target(ctx: &ExtractionContext, reference: &str) -> EdgeTarget {
    match ctx.resolve_class(reference) {
        Some(id) => EdgeTarget::Symbol(id),
        None => EdgeTarget::Unresolved(reference.into()),
    }
}

/// Collect the bare names bound by an assignment target.
///
/// Tuple and list targets are unpacked, starred targets contribute their
/// operand. Attribute and subscript targets bind nothing.
pub(super) fn bound_names(target: &Expr, names: &mut Vec<SmolStr>) {
    match target.kind() {
        SyntaxKind::NAME_REF => names.extend(target.as_name()),
        SyntaxKind::TUPLE_EXPR | SyntaxKind::LIST_EXPR | SyntaxKind::PAREN_EXPR => {
            for element in target.elements() {
                bound_names(&element, names);
            }
        }
        SyntaxKind::STARRED_EXPR => {
            if let Some(operand) = target.starred_operand() {
                bound_names(&operand, names);
            }
        }
        _ => {}
    }
}

/// Check whether a class body declares an abstract method
pub(super) fn has_abstract_method(body: &Block, config: &ExtractorConfig) -> bool {
    body.statements().any(|statement| match statement {
        Statement::FunctionDef(func) => func
            .decorators()
            .any(|d| config.is_abstract_method(&d.reference())),
        _ => false,
    })
}

/// Check whether a subtree contains a function or class definition
pub(super) fn contains_definitions(node: &SyntaxNode) -> bool {
    node.descendants()
        .any(|n| matches!(n.kind(), SyntaxKind::FUNCTION_DEF | SyntaxKind::CLASS_DEF))
}

/// Preceding comment lines of a node, if the configuration wants them
pub(super) fn comment_of(ctx: &ExtractionContext, node: &impl AstNode) -> Option<std::sync::Arc<str>> {
    if !ctx.config.include_comments {
        return None;
    }
    node.preceding_comments().map(Into::into)
}

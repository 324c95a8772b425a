//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for Python syntax nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.
//! Accessors return `Option` everywhere: a node produced under error
//! recovery may lack any of its usual parts.

use rowan::{TextRange, TextSize};
use smol_str::SmolStr;

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Whether `node` has a direct child token of `kind`.
#[inline]
fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    find_token(node, kind).is_some()
}

#[inline]
fn find_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == kind)
}

/// `has_token_method!(is_async, ASYNC_KW, "async def f(): ...")` expands to a
/// `pub fn is_async(&self) -> bool` that looks for a direct `ASYNC_KW` token.
macro_rules! has_token_method {
    ($name:ident, $kind:ident, $example:literal) => {
        #[doc = concat!("Whether the node carries `", stringify!($kind), "`, as in `", $example, "`.")]
        pub fn $name(&self) -> bool {
            has_token(&self.0, SyntaxKind::$kind)
        }
    };
}

macro_rules! first_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("The first `", stringify!($type), "` child, if any.")]
        pub fn $name(&self) -> Option<$type> {
            self.0.children().find_map($type::cast)
        }
    };
}

macro_rules! children_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("All `", stringify!($type), "` children in source order.")]
        pub fn $name(&self) -> impl Iterator<Item = $type> + '_ {
            self.0.children().filter_map($type::cast)
        }
    };
}

/// First `$type` child that follows a `$keyword` token, e.g. the name
/// after `as` in an import alias.
macro_rules! child_after_keyword_method {
    ($name:ident, $type:ident, $keyword:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name(&self) -> Option<$type> {
            self.0
                .children_with_tokens()
                .skip_while(|c| c.kind() != SyntaxKind::$keyword)
                .filter_map(|c| c.into_node())
                .find_map($type::cast)
        }
    };
}

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    /// Find all descendant nodes of a specific AST type
    fn descendants<T: AstNode>(&self) -> impl Iterator<Item = T> {
        self.syntax().descendants().filter_map(T::cast)
    }

    /// Range from the first to the last significant token of this node
    fn significant_range(&self) -> TextRange {
        significant_range(self.syntax())
    }

    /// Comment lines directly above this node.
    fn preceding_comments(&self) -> Option<String> {
        preceding_comments(self.syntax())
    }
}

/// Check whether a token carries source meaning for span purposes
///
/// Trivia and line structure tokens (NEWLINE, INDENT, DEDENT, EOF) are
/// excluded, so a definition's span ends at its last real token.
fn is_significant(token: &SyntaxToken) -> bool {
    let kind = token.kind();
    !kind.is_trivia() && kind != SyntaxKind::NEWLINE && !kind.is_layout()
}

/// Range from the first to the last significant token of a node.
///
/// Falls back to the node's full range when it holds no such token.
pub fn significant_range(node: &SyntaxNode) -> TextRange {
    let mut tokens = node
        .descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(is_significant);
    let Some(first) = tokens.next() else {
        return node.text_range();
    };
    let start: TextSize = first.text_range().start();
    let end = tokens
        .last()
        .map_or(first.text_range().end(), |t| t.text_range().end());
    TextRange::new(start, end)
}

/// Collect the contiguous `#` comment lines directly above a node.
///
/// Walks preceding siblings through whitespace and line breaks. An empty
/// line (two line breaks without a comment between them) or any other
/// token ends the search.
pub fn preceding_comments(node: &SyntaxNode) -> Option<String> {
    let mut comments = Vec::new();
    let mut line_breaks = 0;
    let mut current = node.prev_sibling_or_token();

    while let Some(element) = current {
        let Some(token) = element.as_token() else {
            break;
        };
        match token.kind() {
            SyntaxKind::WHITESPACE => {}
            SyntaxKind::BLANK_LINE => {
                line_breaks += 1;
                if line_breaks > 1 {
                    break;
                }
            }
            SyntaxKind::COMMENT => {
                let text = token.text();
                let content = text.strip_prefix('#').unwrap_or(text).trim();
                comments.push(content.to_string());
                line_breaks = 0;
            }
            _ => break,
        }
        current = token.prev_sibling_or_token();
    }

    if comments.is_empty() {
        return None;
    }

    comments.reverse();
    Some(comments.join("\n"))
}

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

// Declared after the macros so they are in scope.
mod definitions;
mod expressions;
mod statements;

pub use self::definitions::*;
pub use self::expressions::*;
pub use self::statements::*;

#[cfg(test)]
mod tests;

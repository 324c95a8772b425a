use super::*;

// ============================================================================
// Imports
// ============================================================================

ast_node!(ImportStmt, IMPORT_STMT);

impl ImportStmt {
    children_method!(aliases, ImportAlias);
}

ast_node!(ImportFromStmt, IMPORT_FROM_STMT);

impl ImportFromStmt {
    first_child_method!(module, DottedName);
    children_method!(aliases, ImportAlias);

    /// Number of leading dots of a relative import
    pub fn level(&self) -> usize {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .take_while(|t| t.kind() != SyntaxKind::IMPORT_KW)
            .map(|t| match t.kind() {
                SyntaxKind::DOT => 1,
                SyntaxKind::ELLIPSIS => 3,
                _ => 0,
            })
            .sum()
    }

    /// Module path as written, including relative dots (`..pkg.mod`)
    pub fn module_path(&self) -> String {
        let dots = ".".repeat(self.level());
        match self.module() {
            Some(module) => format!("{dots}{}", module.text()),
            None => dots,
        }
    }

    /// Check for `from m import *`
    pub fn is_wildcard(&self) -> bool {
        let mut after_import = false;
        for token in self.0.children_with_tokens().filter_map(|e| e.into_token()) {
            match token.kind() {
                SyntaxKind::IMPORT_KW => after_import = true,
                SyntaxKind::STAR if after_import => return true,
                _ => {}
            }
        }
        false
    }
}

ast_node!(ImportAlias, IMPORT_ALIAS);

impl ImportAlias {
    // Imported module of a plain `import a.b`
    first_child_method!(dotted_name, DottedName);

    child_after_keyword_method!(alias, Name, AS_KW, "Get the name bound by 'as'.");

    /// Imported name of a `from m import name`
    pub fn name(&self) -> Option<Name> {
        let first = self.0.children().next()?;
        Name::cast(first)
    }

    /// Imported path: the dotted module or the single name
    pub fn path(&self) -> Option<String> {
        if let Some(dotted) = self.dotted_name() {
            return Some(dotted.text());
        }
        self.name()?.text().map(|n| n.to_string())
    }
}

// ============================================================================
// Assignments and expression statements
// ============================================================================

ast_node!(Assignment, ASSIGNMENT);

impl Assignment {
    first_child_method!(annotation, TypeAnnotation);

    /// Assigned targets, left to right (`a = b = value` gives `a`, `b`)
    ///
    /// For an annotated assignment this is the single annotated target.
    pub fn targets(&self) -> Vec<Expr> {
        let mut targets = Vec::new();
        let mut pending = None;
        for child in self.0.children_with_tokens() {
            match child {
                rowan::NodeOrToken::Node(n) if n.kind() == SyntaxKind::TYPE_ANNOTATION => {
                    targets.extend(pending.take());
                    break;
                }
                rowan::NodeOrToken::Node(n) => {
                    if let Some(expr) = Expr::cast(n) {
                        pending = Some(expr);
                    }
                }
                rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::EQ => {
                    targets.extend(pending.take());
                }
                rowan::NodeOrToken::Token(_) => {}
            }
        }
        targets
    }

    /// The assigned value: the expression after the last '='
    pub fn value(&self) -> Option<Expr> {
        let mut seen_eq = false;
        let mut value = None;
        for child in self.0.children_with_tokens() {
            match child {
                rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::EQ => {
                    seen_eq = true;
                    value = None;
                }
                rowan::NodeOrToken::Node(n) if seen_eq => {
                    if let Some(expr) = Expr::cast(n) {
                        value = Some(expr);
                    }
                }
                _ => {}
            }
        }
        value
    }
}

ast_node!(ExprStmt, EXPR_STMT);

impl ExprStmt {
    first_child_method!(expr, Expr);
}

// ============================================================================
// Compound statements
// ============================================================================

/// `if`, `while`, `for`, `try`, `with` or one of their clauses
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompoundStmt(pub(crate) SyntaxNode);

impl AstNode for CompoundStmt {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::IF_STMT
                | SyntaxKind::ELIF_CLAUSE
                | SyntaxKind::ELSE_CLAUSE
                | SyntaxKind::WHILE_STMT
                | SyntaxKind::FOR_STMT
                | SyntaxKind::TRY_STMT
                | SyntaxKind::EXCEPT_CLAUSE
                | SyntaxKind::FINALLY_CLAUSE
                | SyntaxKind::WITH_STMT
        )
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

impl CompoundStmt {
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind()
    }

    /// Every block of the statement, clauses included, in source order
    pub fn blocks(&self) -> Vec<Block> {
        let mut blocks = Vec::new();
        for child in self.0.children() {
            if let Some(block) = Block::cast(child.clone()) {
                blocks.push(block);
            } else if let Some(clause) = CompoundStmt::cast(child) {
                blocks.extend(clause.blocks());
            }
        }
        blocks
    }
}

// ============================================================================
// Error
// ============================================================================

ast_node!(ErrorNode, ERROR);

impl ErrorNode {
    // A header that failed to parse (a function missing `def`, an orphan
    // `else:`) still carries its body as a block here.
    children_method!(blocks, Block);
}

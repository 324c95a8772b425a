use super::*;

// ============================================================================
// SourceFile
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    /// Top-level statements in source order
    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        self.0.children().filter_map(Statement::cast)
    }

    /// Module docstring: a plain string literal as the first statement
    pub fn docstring(&self) -> Option<String> {
        docstring_of(&self.0)
    }
}

/// Find the docstring among the statement children of a body node
///
/// Only the first statement counts. Comments and blank lines before it
/// are trivia and do not disqualify it.
pub(crate) fn docstring_of(body: &SyntaxNode) -> Option<String> {
    let first = body.children().find(|n| Statement::can_cast(n.kind()))?;
    let stmt = ExprStmt::cast(first)?;
    let contents = stmt.expr()?.string_contents()?;
    Some(contents.trim().to_string())
}

// ============================================================================
// Statement
// ============================================================================

/// Any statement-level node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    FunctionDef(FunctionDef),
    ClassDef(ClassDef),
    Import(ImportStmt),
    ImportFrom(ImportFromStmt),
    Assignment(Assignment),
    ExprStmt(ExprStmt),
    /// `if`/`while`/`for`/`try`/`with` and their clauses
    Compound(CompoundStmt),
    /// An unexpectedly indented block
    Block(Block),
    /// A region the parser could not fit into the grammar
    Error(ErrorNode),
    /// `pass`, `return`, `raise`, `global`, ...
    Other(SyntaxNode),
}

impl Statement {
    pub fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::FUNCTION_DEF
                | SyntaxKind::CLASS_DEF
                | SyntaxKind::IMPORT_STMT
                | SyntaxKind::IMPORT_FROM_STMT
                | SyntaxKind::ASSIGNMENT
                | SyntaxKind::AUG_ASSIGN
                | SyntaxKind::EXPR_STMT
                | SyntaxKind::RETURN_STMT
                | SyntaxKind::PASS_STMT
                | SyntaxKind::BREAK_STMT
                | SyntaxKind::CONTINUE_STMT
                | SyntaxKind::RAISE_STMT
                | SyntaxKind::GLOBAL_STMT
                | SyntaxKind::NONLOCAL_STMT
                | SyntaxKind::DEL_STMT
                | SyntaxKind::ASSERT_STMT
                | SyntaxKind::BLOCK
                | SyntaxKind::ERROR
        ) || CompoundStmt::can_cast(kind)
    }

    pub fn cast(node: SyntaxNode) -> Option<Self> {
        let stmt = match node.kind() {
            SyntaxKind::FUNCTION_DEF => Self::FunctionDef(FunctionDef(node)),
            SyntaxKind::CLASS_DEF => Self::ClassDef(ClassDef(node)),
            SyntaxKind::IMPORT_STMT => Self::Import(ImportStmt(node)),
            SyntaxKind::IMPORT_FROM_STMT => Self::ImportFrom(ImportFromStmt(node)),
            SyntaxKind::ASSIGNMENT => Self::Assignment(Assignment(node)),
            SyntaxKind::EXPR_STMT => Self::ExprStmt(ExprStmt(node)),
            SyntaxKind::BLOCK => Self::Block(Block(node)),
            SyntaxKind::ERROR => Self::Error(ErrorNode(node)),
            kind if CompoundStmt::can_cast(kind) => Self::Compound(CompoundStmt(node)),
            kind if Self::can_cast(kind) => Self::Other(node),
            _ => return None,
        };
        Some(stmt)
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::FunctionDef(n) => n.syntax(),
            Self::ClassDef(n) => n.syntax(),
            Self::Import(n) => n.syntax(),
            Self::ImportFrom(n) => n.syntax(),
            Self::Assignment(n) => n.syntax(),
            Self::ExprStmt(n) => n.syntax(),
            Self::Compound(n) => n.syntax(),
            Self::Block(n) => n.syntax(),
            Self::Error(n) => n.syntax(),
            Self::Other(n) => n,
        }
    }
}

// ============================================================================
// Block
// ============================================================================

ast_node!(Block, BLOCK);

impl Block {
    /// Statements of the block in source order
    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        self.0.children().filter_map(Statement::cast)
    }

    pub fn docstring(&self) -> Option<String> {
        docstring_of(&self.0)
    }

    /// The docstring statement itself, if any
    pub fn docstring_stmt(&self) -> Option<ExprStmt> {
        let first = self.statements().next()?;
        match first {
            Statement::ExprStmt(stmt) if stmt.expr().is_some_and(|e| e.is_plain_string()) => {
                Some(stmt)
            }
            _ => None,
        }
    }
}

// ============================================================================
// Decorator
// ============================================================================

ast_node!(Decorator, DECORATOR);

impl Decorator {
    first_child_method!(expr, Expr);

    /// Dotted path of the decorator, ignoring any call arguments
    pub fn path(&self) -> Option<String> {
        self.expr()?.dotted_path()
    }

    /// Decorator text after `@`, whitespace-normalized
    pub fn text(&self) -> String {
        self.expr().map(|e| e.normalized_text()).unwrap_or_default()
    }

    /// Name used for reference: the dotted path, else the text
    pub fn reference(&self) -> String {
        self.path().unwrap_or_else(|| self.text())
    }
}

// ============================================================================
// FunctionDef
// ============================================================================

ast_node!(FunctionDef, FUNCTION_DEF);

impl FunctionDef {
    children_method!(decorators, Decorator);
    has_token_method!(is_async, ASYNC_KW, "async def f(): ...");
    first_child_method!(name, Name);
    first_child_method!(type_params, TypeParams);
    first_child_method!(param_list, ParamList);
    first_child_method!(return_type, ReturnType);
    first_child_method!(body, Block);

    /// Header text from `def` (or `async`) through the return annotation
    ///
    /// Decorators and the body are excluded; whitespace is collapsed.
    pub fn signature(&self) -> String {
        header_text(&self.0, &[SyntaxKind::ASYNC_KW, SyntaxKind::DEF_KW])
    }

    /// Check whether the body yields, ignoring nested scopes
    pub fn is_generator(&self) -> bool {
        self.body().is_some_and(|body| contains_yield(body.syntax()))
    }
}

/// Normalized text of a definition header up to its ':'
fn header_text(node: &SyntaxNode, start_kinds: &[SyntaxKind]) -> String {
    let mut out = String::new();
    let mut started = false;
    for child in node.children_with_tokens() {
        match &child {
            rowan::NodeOrToken::Token(t) if !started && start_kinds.contains(&t.kind()) => {
                started = true;
            }
            rowan::NodeOrToken::Node(n) if n.kind() == SyntaxKind::BLOCK => break,
            rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::COLON => break,
            _ => {}
        }
        if !started {
            continue;
        }
        let text = match child {
            rowan::NodeOrToken::Node(n) => normalized_text(&n),
            rowan::NodeOrToken::Token(t) if t.kind().is_trivia() => continue,
            rowan::NodeOrToken::Token(t) => t.text().to_string(),
        };
        if text.is_empty() {
            continue;
        }
        // Parameter and type parameter lists attach to the name
        let glued = text.starts_with(['(', '[']);
        if !out.is_empty() && !glued {
            out.push(' ');
        }
        out.push_str(&text);
    }
    out
}

/// Search a subtree for `yield`, stopping at nested functions, classes
/// and lambdas
fn contains_yield(node: &SyntaxNode) -> bool {
    node.children().any(|child| match child.kind() {
        SyntaxKind::YIELD_EXPR => true,
        SyntaxKind::FUNCTION_DEF | SyntaxKind::CLASS_DEF | SyntaxKind::LAMBDA_EXPR => false,
        _ => contains_yield(&child),
    })
}

ast_node!(ReturnType, RETURN_TYPE);

impl ReturnType {
    first_child_method!(expr, Expr);
}

ast_node!(TypeParams, TYPE_PARAMS);

impl TypeParams {
    /// Names of the declared type parameters
    pub fn names(&self) -> Vec<SmolStr> {
        self.0
            .children()
            .filter_map(Name::cast)
            .filter_map(|n| n.text())
            .collect()
    }
}

// ============================================================================
// Parameters
// ============================================================================

ast_node!(ParamList, PARAM_LIST);

impl ParamList {
    children_method!(params, Param);
}

/// Shape of a single parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// `x`, `x: int`, `x=1`
    Normal,
    /// `*args`
    VarPositional,
    /// `**kwargs`
    VarKeyword,
    /// Bare `*` marking keyword-only parameters
    KeywordOnlyMarker,
    /// `/` marking positional-only parameters
    PositionalOnlyMarker,
}

ast_node!(Param, PARAM);

impl Param {
    first_child_method!(name, Name);
    first_child_method!(annotation, TypeAnnotation);
    first_child_method!(default, ParamDefault);

    pub fn kind(&self) -> ParamKind {
        let has_name = self.name().is_some();
        if has_token(&self.0, SyntaxKind::STAR_STAR) {
            ParamKind::VarKeyword
        } else if has_token(&self.0, SyntaxKind::STAR) {
            if has_name {
                ParamKind::VarPositional
            } else {
                ParamKind::KeywordOnlyMarker
            }
        } else if has_token(&self.0, SyntaxKind::SLASH) {
            ParamKind::PositionalOnlyMarker
        } else {
            ParamKind::Normal
        }
    }

    /// Name with its variadic prefix (`*args`, `**kw`)
    ///
    /// Markers (`*`, `/`) have no display name.
    pub fn display_name(&self) -> Option<String> {
        let name = self.name()?.text()?;
        let prefix = match self.kind() {
            ParamKind::VarPositional => "*",
            ParamKind::VarKeyword => "**",
            _ => "",
        };
        Some(format!("{prefix}{name}"))
    }
}

ast_node!(ParamDefault, PARAM_DEFAULT);

impl ParamDefault {
    first_child_method!(expr, Expr);
}

ast_node!(TypeAnnotation, TYPE_ANNOTATION);

impl TypeAnnotation {
    first_child_method!(expr, Expr);

    /// Annotation text without the leading ':'
    pub fn text(&self) -> String {
        self.expr().map(|e| e.normalized_text()).unwrap_or_default()
    }
}

// ============================================================================
// ClassDef
// ============================================================================

ast_node!(ClassDef, CLASS_DEF);

impl ClassDef {
    children_method!(decorators, Decorator);
    first_child_method!(name, Name);
    first_child_method!(type_params, TypeParams);
    first_child_method!(arg_list, ArgList);
    first_child_method!(body, Block);

    /// Base class expressions in declaration order
    pub fn bases(&self) -> Vec<Expr> {
        self.arg_list()
            .map(|args| args.positional().collect())
            .unwrap_or_default()
    }

    /// The `metaclass=` keyword value
    pub fn metaclass(&self) -> Option<Expr> {
        self.arg_list()?.keyword("metaclass")?.value()
    }

    /// Header text from `class` through the argument list
    pub fn signature(&self) -> String {
        header_text(&self.0, &[SyntaxKind::CLASS_KW])
    }
}

use super::*;

// Expression
// ============================================================================

/// Any expression node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr(pub(crate) SyntaxNode);

impl AstNode for Expr {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::NAME_REF
                | SyntaxKind::LITERAL
                | SyntaxKind::PAREN_EXPR
                | SyntaxKind::TUPLE_EXPR
                | SyntaxKind::LIST_EXPR
                | SyntaxKind::DICT_EXPR
                | SyntaxKind::SET_EXPR
                | SyntaxKind::COMPREHENSION
                | SyntaxKind::CALL_EXPR
                | SyntaxKind::ATTR_EXPR
                | SyntaxKind::SUBSCRIPT_EXPR
                | SyntaxKind::BIN_EXPR
                | SyntaxKind::UNARY_EXPR
                | SyntaxKind::CONDITIONAL_EXPR
                | SyntaxKind::LAMBDA_EXPR
                | SyntaxKind::AWAIT_EXPR
                | SyntaxKind::YIELD_EXPR
                | SyntaxKind::STARRED_EXPR
                | SyntaxKind::NAMED_EXPR
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

impl Expr {
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind()
    }

    /// The identifier of a bare name reference (`x`)
    pub fn as_name(&self) -> Option<SmolStr> {
        if self.kind() != SyntaxKind::NAME_REF {
            return None;
        }
        find_token(&self.0, SyntaxKind::IDENT).map(|t| SmolStr::new(t.text()))
    }

    /// Dotted path of a name or attribute chain (`a.b.c`)
    ///
    /// A call resolves to the path of its callee, so `@app.route("/")`
    /// yields `app.route`. Any other expression has no path.
    pub fn dotted_path(&self) -> Option<String> {
        match self.kind() {
            SyntaxKind::NAME_REF => self.as_name().map(|name| name.to_string()),
            SyntaxKind::ATTR_EXPR => {
                let base = self.0.children().find_map(Expr::cast)?.dotted_path()?;
                let attr = self.0.children().find_map(Name::cast)?.text()?;
                Some(format!("{base}.{attr}"))
            }
            SyntaxKind::CALL_EXPR => self.callee()?.dotted_path(),
            SyntaxKind::PAREN_EXPR => self.0.children().find_map(Expr::cast)?.dotted_path(),
            _ => None,
        }
    }

    /// Callee of a call expression
    pub fn callee(&self) -> Option<Expr> {
        if self.kind() != SyntaxKind::CALL_EXPR {
            return None;
        }
        self.0.children().find_map(Expr::cast)
    }

    /// Argument list of a call expression
    pub fn arg_list(&self) -> Option<ArgList> {
        if self.kind() != SyntaxKind::CALL_EXPR {
            return None;
        }
        self.0.children().find_map(ArgList::cast)
    }

    /// Elements of a tuple, list or parenthesized target
    pub fn elements(&self) -> Vec<Expr> {
        match self.kind() {
            SyntaxKind::TUPLE_EXPR | SyntaxKind::LIST_EXPR | SyntaxKind::PAREN_EXPR => {
                self.0.children().filter_map(Expr::cast).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Operand of `*x` / `**x`
    pub fn starred_operand(&self) -> Option<Expr> {
        if self.kind() != SyntaxKind::STARRED_EXPR {
            return None;
        }
        self.0.children().find_map(Expr::cast)
    }

    /// Check for a literal made only of plain (non-bytes, non-f) strings
    pub fn is_plain_string(&self) -> bool {
        self.kind() == SyntaxKind::LITERAL && {
            let mut tokens = self
                .0
                .children_with_tokens()
                .filter_map(|e| e.into_token())
                .filter(|t| !t.kind().is_trivia())
                .peekable();
            tokens.peek().is_some() && tokens.all(|t| t.kind() == SyntaxKind::STRING)
        }
    }

    /// Contents of a plain string literal, quotes and prefixes removed
    ///
    /// Implicitly concatenated pieces are joined. Escapes are left as
    /// written.
    pub fn string_contents(&self) -> Option<String> {
        if !self.is_plain_string() {
            return None;
        }
        let contents = self
            .0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| t.kind() == SyntaxKind::STRING)
            .map(|t| strip_string_delimiters(t.text()).to_string())
            .collect();
        Some(contents)
    }

    /// Source text with whitespace runs collapsed and comments dropped
    pub fn normalized_text(&self) -> String {
        normalized_text(&self.0)
    }
}

/// Strip the prefix and quotes from a string token
///
/// Unterminated literals keep whatever follows the opening quote.
pub fn strip_string_delimiters(text: &str) -> &str {
    let body = text.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    for quote in ["\"\"\"", "'''", "\"", "'"] {
        if let Some(rest) = body.strip_prefix(quote) {
            return rest.strip_suffix(quote).unwrap_or(rest);
        }
    }
    body
}

/// Text of a node with trivia collapsed to single spaces
///
/// Comments are dropped and no space is kept right inside brackets, so
/// a header split over several lines reads as it would on one line.
pub fn normalized_text(node: &SyntaxNode) -> String {
    let mut out = String::new();
    let mut pending_space = false;
    for token in node.descendants_with_tokens().filter_map(|e| e.into_token()) {
        let kind = token.kind();
        if kind.is_trivia() || kind == SyntaxKind::NEWLINE {
            pending_space = true;
            continue;
        }
        if token.text().is_empty() {
            continue;
        }
        let after_open = out.ends_with(['(', '[', '{']);
        let before_close = matches!(
            kind,
            SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE
        );
        if pending_space && !out.is_empty() && !after_open && !before_close {
            out.push(' ');
        }
        pending_space = false;
        out.push_str(token.text());
    }
    out
}

// ============================================================================
// Names
// ============================================================================

ast_node!(Name, NAME);

impl Name {
    /// Get the identifier text
    pub fn text(&self) -> Option<SmolStr> {
        find_token(&self.0, SyntaxKind::IDENT).map(|t| SmolStr::new(t.text()))
    }
}

ast_node!(DottedName, DOTTED_NAME);

impl DottedName {
    /// Identifier segments in order (`a.b.c` gives `["a", "b", "c"]`)
    pub fn segments(&self) -> Vec<SmolStr> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| t.kind() == SyntaxKind::IDENT)
            .map(|t| SmolStr::new(t.text()))
            .collect()
    }

    /// Segments joined with `.`
    pub fn text(&self) -> String {
        self.segments().join(".")
    }
}

// ============================================================================
// Arguments
// ============================================================================

ast_node!(ArgList, ARG_LIST);

/// A single call argument
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Arg {
    /// `f(x)`
    Positional(Expr),
    /// `f(*xs)` or `f(**kw)`
    Unpacked(Expr),
    /// `f(key=value)`
    Keyword(KeywordArg),
}

impl ArgList {
    /// Arguments in source order
    pub fn args(&self) -> impl Iterator<Item = Arg> + '_ {
        self.0.children().filter_map(|node| match node.kind() {
            SyntaxKind::KEYWORD_ARG => KeywordArg::cast(node).map(Arg::Keyword),
            SyntaxKind::STARRED_EXPR => Expr::cast(node).map(Arg::Unpacked),
            _ => Expr::cast(node).map(Arg::Positional),
        })
    }

    /// Positional argument expressions, in order
    pub fn positional(&self) -> impl Iterator<Item = Expr> + '_ {
        self.args().filter_map(|arg| match arg {
            Arg::Positional(expr) => Some(expr),
            _ => None,
        })
    }

    /// Find a keyword argument by name
    pub fn keyword(&self, name: &str) -> Option<KeywordArg> {
        self.0
            .children()
            .filter_map(KeywordArg::cast)
            .find(|kw| kw.name().and_then(|n| n.text()).as_deref() == Some(name))
    }
}

ast_node!(KeywordArg, KEYWORD_ARG);

impl KeywordArg {
    first_child_method!(name, Name);
    first_child_method!(value, Expr);
}

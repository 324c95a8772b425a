//! Recursive descent parser for Python
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.
//!
//! Trivia is not consumed eagerly: it is flushed into the tree right before
//! the next significant token, node start or checkpoint. Comments therefore
//! precede the node they introduce instead of trailing the previous one.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::ast::{AstNode, SourceFile};
use super::errors::{ErrorCode, ParseContext, SyntaxError};
use super::grammar::{ExpressionParser, MAX_NESTING_DEPTH, StatementParser, parse_statements};
use super::lexer::{Lexer, Token};
use super::syntax_kind::{SyntaxKind, SyntaxNode};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    /// Lexer and parser diagnostics, ordered by start offset
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Typed root of the tree
    pub fn source_file(&self) -> Option<SourceFile> {
        SourceFile::cast(self.syntax())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Debug dump of the tree, one node or token per line
    pub fn debug_tree(&self) -> String {
        format!("{:#?}", self.syntax())
    }
}

/// Parse Python source code into a CST
///
/// Never fails: malformed regions become `ERROR` nodes and diagnostics,
/// and the tree text always equals `input`.
pub fn parse(input: &str) -> Parse {
    let mut lexer = Lexer::new(input);
    let tokens: Vec<_> = lexer.by_ref().collect();

    let mut parser = Parser::new(&tokens);
    parser.parse_source_file();
    let mut parse = parser.finish();

    parse.errors.extend(lexer.into_errors());
    parse.errors.sort_by_key(|error| error.range.start());
    tracing::trace!(
        tokens = tokens.len(),
        errors = parse.errors.len(),
        "parsed source file"
    );
    parse
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
    contexts: Vec<ParseContext>,
    last_end: TextSize,
    /// Open brackets, blocks and prefix operands on the call stack
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
            contexts: Vec::new(),
            last_end: TextSize::new(0),
            depth: 0,
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    /// The next significant token, skipping trivia
    fn current(&self) -> Option<&'a Token<'a>> {
        let tokens = self.tokens;
        tokens[self.pos..].iter().find(|token| !token.kind.is_trivia())
    }

    fn current_range(&self) -> TextRange {
        self.current()
            .map_or_else(|| TextRange::empty(self.last_end), |token| token.range())
    }

    fn at_line_boundary(&self) -> bool {
        self.at_any(&[
            SyntaxKind::NEWLINE,
            SyntaxKind::INDENT,
            SyntaxKind::DEDENT,
            SyntaxKind::EOF,
        ])
    }

    // =========================================================================
    // Trivia
    // =========================================================================

    /// Flush pending trivia into the tree
    fn skip_trivia(&mut self) {
        let tokens = self.tokens;
        while let Some(token) = tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    // =========================================================================
    // Source file
    // =========================================================================

    /// SourceFile = Statement* EOF
    fn parse_source_file(&mut self) {
        self.builder.start_node(SyntaxKind::SOURCE_FILE.into());
        self.contexts.push(ParseContext::TopLevel);

        loop {
            parse_statements(self);
            if !self.at(SyntaxKind::DEDENT) {
                break;
            }
            // Unreachable with a well-formed token stream; keep the tree total
            self.error("unexpected dedent", ErrorCode::E0999);
            self.bump();
        }

        // The EOF token carries trailing trivia into the tree
        self.bump();
        self.skip_trivia();
        self.builder.finish_node();
    }
}

impl ExpressionParser for Parser<'_> {
    fn current_kind(&self) -> SyntaxKind {
        self.current().map_or(SyntaxKind::EOF, |token| token.kind)
    }

    fn current_text(&self) -> &str {
        self.current().map_or("", |token| token.text)
    }

    fn lookahead(&self) -> impl Iterator<Item = SyntaxKind> + '_ {
        self.tokens[self.pos..]
            .iter()
            .map(|token| token.kind)
            .filter(|kind| !kind.is_trivia())
    }

    fn get_pos(&self) -> usize {
        self.pos
    }

    fn bump(&mut self) {
        self.skip_trivia();
        let tokens = self.tokens;
        if let Some(token) = tokens.get(self.pos) {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
            if !token.text.is_empty() {
                self.last_end = token.range().end();
            }
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        let found = self.current_kind().describe();
        self.error(
            format!("expected {}, found {}", kind.describe(), found),
            ErrorCode::E0902,
        );
        false
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        self.skip_trivia();
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.skip_trivia();
        self.builder.checkpoint()
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    fn enter_nesting(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            return false;
        }
        self.depth += 1;
        true
    }

    fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn error(&mut self, message: impl Into<String>, code: ErrorCode) {
        let range = self.current_range();
        self.errors.push(SyntaxError::new(message, range, code));
    }

    fn error_recover(&mut self, message: impl Into<String>, code: ErrorCode, recovery: &[SyntaxKind]) {
        if self.at_line_boundary() {
            self.error(message, code);
            return;
        }

        let start = self.current_range().start();
        self.start_node(SyntaxKind::ERROR);
        let mut end = self.current_range().end();
        self.bump();
        while !self.at_line_boundary() && !self.at_any(recovery) {
            end = self.current_range().end();
            self.bump();
        }
        self.finish_node();

        let range = TextRange::new(start, end);
        tracing::debug!(?range, code = %code, "recovered from syntax error");
        self.errors.push(SyntaxError::new(message, range, code));
    }
}

impl StatementParser for Parser<'_> {
    fn push_context(&mut self, context: ParseContext) {
        self.contexts.push(context);
    }

    fn pop_context(&mut self) {
        self.contexts.pop();
    }

    fn context(&self) -> ParseContext {
        self.contexts.last().copied().unwrap_or_default()
    }

    fn current_offset(&self) -> TextSize {
        self.current_range().start()
    }

    fn last_end(&self) -> TextSize {
        self.last_end
    }

    fn push_error(&mut self, error: SyntaxError) {
        self.errors.push(error);
    }
}

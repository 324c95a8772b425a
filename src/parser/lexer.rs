//! Logos-based lexer for Python source
//!
//! Tokenization happens in two layers:
//! - [`LogosToken`] is the context-free tokenizer generated by logos. String
//!   literals are scanned by a callback that re-enters the tokenizer inside
//!   f-string substitutions.
//! - [`Lexer`] adds layout on top: logical NEWLINEs, zero-width INDENT/DEDENT
//!   tokens, bracket tracking, and lexical diagnostics.

use std::collections::VecDeque;

use logos::Logos;
use rowan::{TextRange, TextSize};

use super::errors::{ErrorCode, RelatedInfo, SyntaxError};
use super::keywords;
use super::syntax_kind::SyntaxKind;

/// Tabs advance indentation to the next multiple of this width.
const TAB_WIDTH: u32 = 8;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IndentLevel {
    width: u32,
    /// Pushed when snapping an inconsistent dedent; popping it emits no DEDENT.
    synthetic: bool,
}

impl IndentLevel {
    const ROOT: IndentLevel = IndentLevel {
        width: 0,
        synthetic: false,
    };
}

#[derive(Debug, Clone, Copy)]
struct OpenBracket {
    kind: SyntaxKind,
    range: TextRange,
    /// Indentation of the logical line the bracket was opened on.
    line_indent: u32,
}

/// Layout-aware lexer wrapping the logos-generated tokenizer.
///
/// Lazy and restartable: cloning a lexer mid-stream yields an independent
/// cursor over the remaining tokens. The stream always ends with an
/// [`SyntaxKind::EOF`] token; malformed input never stops it.
#[derive(Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    inner: logos::Lexer<'a, LogosToken>,
    queue: VecDeque<Token<'a>>,
    /// Trivia seen before the first token of a logical line. Held back so
    /// layout tokens are emitted ahead of it.
    trivia: Vec<Token<'a>>,
    indents: Vec<IndentLevel>,
    brackets: Vec<OpenBracket>,
    line_indent: u32,
    line_has_content: bool,
    physical_line_start: bool,
    finished: bool,
    errors: Vec<SyntaxError>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            inner: LogosToken::lexer(input),
            queue: VecDeque::new(),
            trivia: Vec::new(),
            indents: vec![IndentLevel::ROOT],
            brackets: Vec::new(),
            line_indent: 0,
            line_has_content: false,
            physical_line_start: true,
            finished: false,
            errors: Vec::new(),
        }
    }

    /// Diagnostics reported for the tokens produced so far
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.errors
    }

    fn push_raw(&mut self, raw: Result<LogosToken, ()>) {
        let text = self.inner.slice();
        let offset = TextSize::new(self.inner.span().start as u32);

        match raw {
            Ok(LogosToken::Whitespace | LogosToken::Comment | LogosToken::LineContinuation) => {
                let kind = match raw {
                    Ok(LogosToken::Comment) => SyntaxKind::COMMENT,
                    Ok(LogosToken::LineContinuation) => SyntaxKind::LINE_CONTINUATION,
                    _ => SyntaxKind::WHITESPACE,
                };
                self.push_trivia(Token { kind, text, offset });
            }
            Ok(LogosToken::Newline) => {
                self.physical_line_start = true;
                if self.brackets.is_empty() && self.line_has_content {
                    self.line_has_content = false;
                    self.queue.push_back(Token {
                        kind: SyntaxKind::NEWLINE,
                        text,
                        offset,
                    });
                } else {
                    self.push_trivia(Token {
                        kind: SyntaxKind::BLANK_LINE,
                        text,
                        offset,
                    });
                }
            }
            Ok(token_kind) => {
                let kind = match token_kind {
                    LogosToken::Ident => keywords::keyword_kind(text).unwrap_or(SyntaxKind::IDENT),
                    other => other.into(),
                };
                let token = Token { kind, text, offset };
                if let LogosToken::String(scan) = token_kind {
                    self.report_string(scan, token.range());
                }
                self.push_significant(token);
            }
            Err(()) => {
                let token = Token {
                    kind: SyntaxKind::ERROR,
                    text,
                    offset,
                };
                self.errors.push(SyntaxError::new(
                    format!("invalid character `{}`", text.escape_debug()),
                    token.range(),
                    ErrorCode::E0101,
                ));
                self.push_significant(token);
            }
        }
    }

    fn push_trivia(&mut self, token: Token<'a>) {
        if self.brackets.is_empty() && !self.line_has_content {
            self.trivia.push(token);
        } else {
            self.queue.push_back(token);
        }
    }

    fn push_significant(&mut self, token: Token<'a>) {
        if self.brackets.is_empty() {
            if !self.line_has_content {
                self.apply_indentation(token.offset);
            }
        } else if self.physical_line_start && keywords::is_statement_only_keyword(token.kind) {
            let width = self.indent_width(token.offset);
            let opener_indent = self.brackets.first().map_or(0, |open| open.line_indent);
            if width <= opener_indent {
                self.abandon_brackets(token.offset);
                self.queue.push_back(Token {
                    kind: SyntaxKind::NEWLINE,
                    text: "",
                    offset: token.offset,
                });
                self.line_has_content = false;
                self.apply_indentation(token.offset);
            }
        }

        self.queue.extend(self.trivia.drain(..));
        self.track_bracket(&token);
        self.line_has_content = true;
        self.physical_line_start = false;
        self.queue.push_back(token);
    }

    fn current_indent(&self) -> IndentLevel {
        self.indents.last().copied().unwrap_or(IndentLevel::ROOT)
    }

    /// Emit INDENT/DEDENT for a logical line whose first token sits at `offset`.
    fn apply_indentation(&mut self, offset: TextSize) {
        let width = self.indent_width(offset);
        self.line_indent = width;
        // Layout tokens go ahead of the held-back trivia, so they take its start
        let layout_offset = self.trivia.first().map_or(offset, |t| t.offset);
        let layout = |kind| Token {
            kind,
            text: "",
            offset: layout_offset,
        };

        let top = self.current_indent();
        if width > top.width {
            self.indents.push(IndentLevel {
                width,
                synthetic: false,
            });
            self.queue.push_back(layout(SyntaxKind::INDENT));
            return;
        }

        loop {
            let top = self.current_indent();
            if top.width <= width {
                break;
            }
            self.indents.pop();
            if !top.synthetic {
                self.queue.push_back(layout(SyntaxKind::DEDENT));
            }
        }

        if self.current_indent().width < width {
            tracing::trace!(width, "snapping inconsistent dedent");
            self.errors.push(
                SyntaxError::new(
                    "unindent does not match any outer indentation level",
                    TextRange::empty(offset),
                    ErrorCode::E0201,
                )
                .with_hint("the line is treated as part of the enclosing block"),
            );
            self.indents.push(IndentLevel {
                width,
                synthetic: true,
            });
        }
    }

    /// Indentation width of the physical line containing `offset`.
    fn indent_width(&self, offset: TextSize) -> u32 {
        let offset = usize::from(offset);
        let line_start = self.input[..offset]
            .rfind(['\n', '\r'])
            .map_or(0, |at| at + 1);

        let mut width = 0;
        for ch in self.input[line_start..offset].chars() {
            match ch {
                '\t' => width = (width / TAB_WIDTH + 1) * TAB_WIDTH,
                '\x0C' => width = 0,
                '\u{FEFF}' => {}
                _ => width += 1,
            }
        }
        width
    }

    fn track_bracket(&mut self, token: &Token<'a>) {
        match token.kind {
            SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => {
                self.brackets.push(OpenBracket {
                    kind: token.kind,
                    range: token.range(),
                    line_indent: self.line_indent,
                });
            }
            SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                match self.brackets.pop() {
                    None => self.errors.push(SyntaxError::new(
                        format!("unexpected closing `{}`", token.text),
                        token.range(),
                        ErrorCode::E0205,
                    )),
                    Some(open) if closing_for(open.kind) != token.kind => {
                        self.errors.push(
                            SyntaxError::new(
                                format!("mismatched closing `{}`", token.text),
                                token.range(),
                                ErrorCode::E0207,
                            )
                            .with_related(RelatedInfo::new("opening delimiter here", open.range)),
                        );
                    }
                    Some(_) => {}
                }
            }
            _ => {}
        }
    }

    /// Drop every open bracket, reporting the outermost one.
    fn abandon_brackets(&mut self, at: TextSize) {
        if let Some(open) = self.brackets.first() {
            tracing::debug!(offset = u32::from(at), "closing brackets implicitly");
            self.errors.push(
                SyntaxError::new(
                    format!("unclosed `{}`", opening_text(open.kind)),
                    open.range,
                    unclosed_code(open.kind),
                )
                .with_hint("the bracket is closed implicitly at the next statement"),
            );
        }
        self.brackets.clear();
    }

    fn finish_input(&mut self) {
        let end = TextSize::of(self.input);
        self.abandon_brackets(end);

        if self.line_has_content {
            self.line_has_content = false;
            self.queue.push_back(Token {
                kind: SyntaxKind::NEWLINE,
                text: "",
                offset: end,
            });
        }
        let dedent_offset = self.trivia.first().map_or(end, |t| t.offset);
        while let Some(level) = self.indents.pop() {
            if level != IndentLevel::ROOT && !level.synthetic {
                self.queue.push_back(Token {
                    kind: SyntaxKind::DEDENT,
                    text: "",
                    offset: dedent_offset,
                });
            }
        }
        self.queue.extend(self.trivia.drain(..));
        self.queue.push_back(Token {
            kind: SyntaxKind::EOF,
            text: "",
            offset: end,
        });
        self.finished = true;
    }

    fn report_string(&mut self, scan: StringScan, range: TextRange) {
        let error = match scan.status {
            StringStatus::Terminated => return,
            StringStatus::Unterminated => {
                SyntaxError::new("unterminated string literal", range, ErrorCode::E0102)
            }
            StringStatus::UnterminatedTriple => SyntaxError::new(
                "unterminated triple-quoted string literal",
                range,
                ErrorCode::E0103,
            ),
            StringStatus::UnbalancedSubstitution => SyntaxError::new(
                "unbalanced braces in f-string substitution",
                range,
                ErrorCode::E0105,
            )
            .with_hint("the rest of the line is treated as literal text"),
            StringStatus::NestedTooDeeply => SyntaxError::new(
                "f-string substitutions are nested too deeply",
                range,
                ErrorCode::E0105,
            )
            .with_hint("the rest of the line is treated as literal text"),
        };
        self.errors.push(error);
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return Some(token);
            }
            if self.finished {
                return None;
            }
            match self.inner.next() {
                Some(raw) => self.push_raw(raw),
                None => self.finish_input(),
            }
        }
    }
}

fn closing_for(open: SyntaxKind) -> SyntaxKind {
    match open {
        SyntaxKind::L_PAREN => SyntaxKind::R_PAREN,
        SyntaxKind::L_BRACKET => SyntaxKind::R_BRACKET,
        _ => SyntaxKind::R_BRACE,
    }
}

fn opening_text(open: SyntaxKind) -> &'static str {
    match open {
        SyntaxKind::L_PAREN => "(",
        SyntaxKind::L_BRACKET => "[",
        _ => "{",
    }
}

fn unclosed_code(open: SyntaxKind) -> ErrorCode {
    match open {
        SyntaxKind::L_PAREN => ErrorCode::E0203,
        SyntaxKind::L_BRACKET => ErrorCode::E0204,
        _ => ErrorCode::E0202,
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

// =============================================================================
// STRING SCANNING
// =============================================================================

/// What kind of literal a string prefix introduces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFlavor {
    Plain,
    Bytes,
    Format,
}

/// How a string literal ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringStatus {
    Terminated,
    /// Single-quoted literal cut off by the end of its line
    Unterminated,
    /// Triple-quoted literal running into the end of input
    UnterminatedTriple,
    /// An f-string `{...}` that never balanced; the token runs to end of line
    UnbalancedSubstitution,
    /// F-strings nested past [`MAX_FSTRING_NESTING`]; the token runs to end of line
    NestedTooDeeply,
}

/// Deepest f-string nesting that substitution scanning follows
pub const MAX_FSTRING_NESTING: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringScan {
    pub flavor: StringFlavor,
    pub status: StringStatus,
}

/// `lex.extras` is the f-string nesting of the lexer producing this token.
fn lex_string(lex: &mut logos::Lexer<LogosToken>) -> StringScan {
    let opener = lex.slice();
    let quote = opener.as_bytes()[opener.len() - 1];
    let prefix = &opener[..opener.len() - 1];
    let flavor = if prefix.contains(['f', 'F']) {
        StringFlavor::Format
    } else if prefix.contains(['b', 'B']) {
        StringFlavor::Bytes
    } else {
        StringFlavor::Plain
    };

    let rest = lex.remainder();
    let triple = rest.as_bytes().starts_with(&[quote, quote]);
    let body_start = if triple { 2 } else { 0 };
    let format = (flavor == StringFlavor::Format).then_some(lex.extras);
    let (consumed, status) = scan_string_body(rest, body_start, quote, triple, format);
    lex.bump(consumed);
    StringScan { flavor, status }
}

/// Scan a string body starting at `start`, returning bytes consumed.
///
/// `format` carries the f-string nesting depth, or `None` for plain strings.
fn scan_string_body(
    rest: &str,
    start: usize,
    quote: u8,
    triple: bool,
    format: Option<usize>,
) -> (usize, StringStatus) {
    let bytes = rest.as_bytes();
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += if bytes[i + 1..].starts_with(b"\r\n") { 3 } else { 2 },
            b'\n' | b'\r' if !triple => return (i, StringStatus::Unterminated),
            b if b == quote => {
                if !triple {
                    return (i + 1, StringStatus::Terminated);
                }
                if bytes[i..].starts_with(&[quote, quote, quote]) {
                    return (i + 3, StringStatus::Terminated);
                }
                i += 1;
            }
            b'{' if format.is_some() => {
                if bytes.get(i + 1) == Some(&b'{') {
                    i += 2;
                    continue;
                }
                let nesting = format.map_or(1, |depth| depth + 1);
                match scan_substitution(&rest[i + 1..], quote, triple, nesting) {
                    Ok(len) => i += 1 + len,
                    Err(status) => return (line_end(rest, i), status),
                }
            }
            _ => i += 1,
        }
    }

    let status = if triple {
        StringStatus::UnterminatedTriple
    } else {
        StringStatus::Unterminated
    };
    (bytes.len(), status)
}

/// Scan an f-string substitution body (after `{`) by re-entering the tokenizer,
/// so nested literals may reuse the outer quote character.
///
/// Returns the length up to and including the closing `}`. `nesting` is
/// the f-string depth of the substitution's contents.
fn scan_substitution(
    text: &str,
    quote: u8,
    triple: bool,
    nesting: usize,
) -> Result<usize, StringStatus> {
    if nesting > MAX_FSTRING_NESTING {
        return Err(StringStatus::NestedTooDeeply);
    }
    let mut lex = LogosToken::lexer_with_extras(text, nesting);
    let mut depth = 0usize;
    while let Some(token) = lex.next() {
        match token {
            Ok(LogosToken::LParen | LogosToken::LBracket | LogosToken::LBrace) => depth += 1,
            Ok(LogosToken::RParen | LogosToken::RBracket) => depth = depth.saturating_sub(1),
            Ok(LogosToken::RBrace) => {
                if depth == 0 {
                    return Ok(lex.span().end);
                }
                depth -= 1;
            }
            Ok(LogosToken::Colon | LogosToken::ColonEq) if depth == 0 => {
                return scan_format_spec(text, lex.span().start + 1, quote, triple, nesting);
            }
            Ok(LogosToken::Newline | LogosToken::Comment) if !triple => break,
            Ok(LogosToken::String(scan)) if scan.status == StringStatus::NestedTooDeeply => {
                return Err(StringStatus::NestedTooDeeply);
            }
            Ok(LogosToken::String(scan)) if scan.status != StringStatus::Terminated => break,
            _ => {}
        }
    }
    Err(StringStatus::UnbalancedSubstitution)
}

fn scan_format_spec(
    text: &str,
    start: usize,
    quote: u8,
    triple: bool,
    nesting: usize,
) -> Result<usize, StringStatus> {
    let bytes = text.as_bytes();
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => i += 1 + scan_substitution(&text[i + 1..], quote, triple, nesting + 1)?,
            b'}' => return Ok(i + 1),
            b'\n' | b'\r' if !triple => break,
            b if b == quote && !triple => break,
            _ => i += 1,
        }
    }
    Err(StringStatus::UnbalancedSubstitution)
}

fn line_end(text: &str, from: usize) -> usize {
    text[from..]
        .find(['\n', '\r'])
        .map_or(text.len(), |at| from + at)
}

fn lex_ident(lex: &mut logos::Lexer<LogosToken>) -> bool {
    let Some(first) = lex.slice().chars().next() else {
        return false;
    };
    if first != '_' && !unicode_ident::is_xid_start(first) {
        return false;
    }
    let len: usize = lex
        .remainder()
        .chars()
        .take_while(|&ch| unicode_ident::is_xid_continue(ch))
        .map(char::len_utf8)
        .sum();
    lex.bump(len);
    true
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(extras = usize)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\x0C\x{FEFF}]+")]
    Whitespace,

    #[regex(r"\\(\r\n|\n|\r)")]
    LineContinuation,

    #[regex(r"\r\n|\n|\r")]
    Newline,

    #[regex(r"#[^\r\n]*")]
    Comment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// First character only; the callback validates and extends it
    #[regex(r"[A-Za-z_\x{80}-\x{FEFE}\x{FF00}-\x{10FFFF}]", lex_ident)]
    Ident,

    #[regex(r"[0-9](_?[0-9])*")]
    #[regex(r"0[xX](_?[0-9a-fA-F])+")]
    #[regex(r"0[oO](_?[0-7])+")]
    #[regex(r"0[bB](_?[01])+")]
    Int,

    #[regex(r"[0-9](_?[0-9])*\.([0-9](_?[0-9])*)?([eE][+-]?[0-9](_?[0-9])*)?")]
    #[regex(r"\.[0-9](_?[0-9])*([eE][+-]?[0-9](_?[0-9])*)?")]
    #[regex(r"[0-9](_?[0-9])*[eE][+-]?[0-9](_?[0-9])*")]
    Float,

    #[regex(r"([0-9](_?[0-9])*(\.([0-9](_?[0-9])*)?)?|\.[0-9](_?[0-9])*)([eE][+-]?[0-9](_?[0-9])*)?[jJ]")]
    Imaginary,

    /// Prefix and opening quote; the callback scans the body
    #[regex(r#"([rRbBuUfF]|[rR][bBfF]|[bBfF][rR])?['"]"#, lex_string)]
    String(StringScan),

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("...")]
    Ellipsis,

    #[token("->")]
    Arrow,

    #[token(":=")]
    ColonEq,

    #[token("**=")]
    StarStarEq,

    #[token("//=")]
    SlashSlashEq,

    #[token("<<=")]
    ShlEq,

    #[token(">>=")]
    ShrEq,

    #[token("==")]
    EqEq,

    #[token("!=")]
    BangEq,

    #[token("<>")]
    LtGt,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("**")]
    StarStar,

    #[token("//")]
    SlashSlash,

    #[token("<<")]
    Shl,

    #[token(">>")]
    Shr,

    #[token("+=")]
    PlusEq,

    #[token("-=")]
    MinusEq,

    #[token("*=")]
    StarEq,

    #[token("/=")]
    SlashEq,

    #[token("%=")]
    PercentEq,

    #[token("&=")]
    AmpEq,

    #[token("|=")]
    PipeEq,

    #[token("^=")]
    CaretEq,

    #[token("@=")]
    AtEq,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("@")]
    At,

    #[token("=")]
    Eq,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("&")]
    Amp,

    #[token("|")]
    Pipe,

    #[token("^")]
    Caret,

    #[token("~")]
    Tilde,

    #[token("!")]
    Bang,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::LineContinuation => SyntaxKind::LINE_CONTINUATION,
            LogosToken::Newline => SyntaxKind::NEWLINE,
            LogosToken::Comment => SyntaxKind::COMMENT,
            LogosToken::Ident => SyntaxKind::IDENT,
            LogosToken::Int => SyntaxKind::INT_NUMBER,
            LogosToken::Float => SyntaxKind::FLOAT_NUMBER,
            LogosToken::Imaginary => SyntaxKind::IMAGINARY_NUMBER,
            LogosToken::String(scan) => match scan.flavor {
                StringFlavor::Plain => SyntaxKind::STRING,
                StringFlavor::Bytes => SyntaxKind::BYTES,
                StringFlavor::Format => SyntaxKind::FSTRING,
            },
            LogosToken::Ellipsis => SyntaxKind::ELLIPSIS,
            LogosToken::Arrow => SyntaxKind::ARROW,
            LogosToken::ColonEq => SyntaxKind::COLON_EQ,
            LogosToken::StarStarEq => SyntaxKind::STAR_STAR_EQ,
            LogosToken::SlashSlashEq => SyntaxKind::SLASH_SLASH_EQ,
            LogosToken::ShlEq => SyntaxKind::SHL_EQ,
            LogosToken::ShrEq => SyntaxKind::SHR_EQ,
            LogosToken::EqEq => SyntaxKind::EQ_EQ,
            LogosToken::BangEq => SyntaxKind::BANG_EQ,
            LogosToken::LtGt => SyntaxKind::LT_GT,
            LogosToken::LtEq => SyntaxKind::LT_EQ,
            LogosToken::GtEq => SyntaxKind::GT_EQ,
            LogosToken::StarStar => SyntaxKind::STAR_STAR,
            LogosToken::SlashSlash => SyntaxKind::SLASH_SLASH,
            LogosToken::Shl => SyntaxKind::SHL,
            LogosToken::Shr => SyntaxKind::SHR,
            LogosToken::PlusEq => SyntaxKind::PLUS_EQ,
            LogosToken::MinusEq => SyntaxKind::MINUS_EQ,
            LogosToken::StarEq => SyntaxKind::STAR_EQ,
            LogosToken::SlashEq => SyntaxKind::SLASH_EQ,
            LogosToken::PercentEq => SyntaxKind::PERCENT_EQ,
            LogosToken::AmpEq => SyntaxKind::AMP_EQ,
            LogosToken::PipeEq => SyntaxKind::PIPE_EQ,
            LogosToken::CaretEq => SyntaxKind::CARET_EQ,
            LogosToken::AtEq => SyntaxKind::AT_EQ,
            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::LBracket => SyntaxKind::L_BRACKET,
            LogosToken::RBracket => SyntaxKind::R_BRACKET,
            LogosToken::LBrace => SyntaxKind::L_BRACE,
            LogosToken::RBrace => SyntaxKind::R_BRACE,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Semicolon => SyntaxKind::SEMICOLON,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::At => SyntaxKind::AT,
            LogosToken::Eq => SyntaxKind::EQ,
            LogosToken::Lt => SyntaxKind::LT,
            LogosToken::Gt => SyntaxKind::GT,
            LogosToken::Plus => SyntaxKind::PLUS,
            LogosToken::Minus => SyntaxKind::MINUS,
            LogosToken::Star => SyntaxKind::STAR,
            LogosToken::Slash => SyntaxKind::SLASH,
            LogosToken::Percent => SyntaxKind::PERCENT,
            LogosToken::Amp => SyntaxKind::AMP,
            LogosToken::Pipe => SyntaxKind::PIPE,
            LogosToken::Caret => SyntaxKind::CARET,
            LogosToken::Tilde => SyntaxKind::TILDE,
            LogosToken::Bang => SyntaxKind::BANG,
        }
    }
}

//! Diagnostics: structured reporting of recoverable problems.
//!
//! Parse errors from the lexer and parser, notes from the extractor and
//! fatal input problems all end up as `Diagnostic` values. None of them
//! stop extraction; callers decide which severities block downstream use.

use std::fmt;
use std::sync::Arc;

use rowan::TextRange;

use crate::base::{LineIndex, Span};
use crate::parser::{self, SyntaxError};

/// Ordered from most to least serious.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Hint => "hint",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<parser::Severity> for Severity {
    fn from(severity: parser::Severity) -> Self {
        match severity {
            parser::Severity::Error => Severity::Error,
            parser::Severity::Warning => Severity::Warning,
            parser::Severity::Hint => Severity::Hint,
        }
    }
}

/// A located problem in one input file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: Arc<str>,
    /// Byte range the diagnostic refers to.
    pub range: TextRange,
    /// 0-based line/column span of `range`.
    pub span: Span,
    pub severity: Severity,
    /// Stable code such as "E0302" or "I0001".
    pub code: Option<Arc<str>>,
    pub message: Arc<str>,
    /// How the engine recovered, or how to fix the input.
    pub hint: Option<Arc<str>>,
    pub related: Vec<RelatedInfo>,
}

/// A secondary location attached to a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelatedInfo {
    pub range: TextRange,
    pub span: Span,
    pub message: Arc<str>,
}

impl Diagnostic {
    fn new(
        severity: Severity,
        path: Arc<str>,
        range: TextRange,
        span: Span,
        message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            path,
            range,
            span,
            severity,
            code: None,
            message: message.into(),
            hint: None,
            related: Vec::new(),
        }
    }

    pub fn error(path: Arc<str>, range: TextRange, span: Span, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Error, path, range, span, message)
    }

    pub fn info(path: Arc<str>, range: TextRange, span: Span, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Info, path, range, span, message)
    }

    /// Convert a parse-time error, resolving its ranges to line/column spans.
    pub fn from_syntax_error(path: Arc<str>, error: &SyntaxError, line_index: &LineIndex) -> Self {
        let mut diagnostic = Self::new(
            error.severity.into(),
            path,
            error.range,
            line_index.span(error.range),
            error.message.as_str(),
        )
        .with_code(error.code.as_str());
        diagnostic.hint = error.hint.as_deref().map(Arc::from);
        diagnostic.related = error
            .related
            .iter()
            .map(|info| RelatedInfo {
                range: info.range,
                span: line_index.span(info.range),
                message: Arc::from(info.message.as_str()),
            })
            .collect();
        diagnostic
    }

    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Describe how extraction recovered.
    pub fn with_hint(mut self, hint: impl Into<Arc<str>>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.span.start.to_one_based();
        write!(f, "{}:{}:{}: {}", self.path, start.line, start.column, self.severity)?;
        if let Some(code) = &self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Codes for diagnostics raised outside the parser.
///
/// Parser codes (E01xx-E09xx) come from [`crate::parser::ErrorCode`].
///
/// ## Code Ranges
///
/// - **F0001-F0099**: Fatal input problems (no graph is produced)
/// - **I0001-I0099**: Informational notes from extraction
pub mod codes {
    /// Input bytes are not valid UTF-8.
    pub const INVALID_ENCODING: &str = "F0001";
    /// Definitions were salvaged from a malformed statement.
    pub const SALVAGED_DEFINITIONS: &str = "I0001";
    /// A definition without a name was skipped.
    pub const UNNAMED_DEFINITION: &str = "I0002";
}

/// Accumulates the diagnostics of an analysis run.
///
/// Sources push in whatever order they run; [`finish`](Self::finish)
/// sorts them by file and position.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add every parse error of a file.
    pub fn add_syntax_errors(&mut self, path: &Arc<str>, errors: &[SyntaxError], line_index: &LineIndex) {
        self.diagnostics.extend(
            errors
                .iter()
                .map(|error| Diagnostic::from_syntax_error(path.clone(), error, line_index)),
        );
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of diagnostics at `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take all diagnostics, ordered by file and position.
    pub fn finish(mut self) -> Vec<Diagnostic> {
        self.diagnostics
            .sort_by(|a, b| (&a.path, a.range.start()).cmp(&(&b.path, b.range.start())));
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Position;
    use crate::parser::ErrorCode;
    use rowan::TextSize;

    fn path() -> Arc<str> {
        Arc::from("test.py")
    }

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(TextSize::new(start), TextSize::new(end))
    }

    #[test]
    fn error_has_no_code_by_default() {
        let diag = Diagnostic::error(path(), range(0, 1), Span::default(), "test error");
        assert_eq!(diag.severity, Severity::Error);
        assert!(diag.is_error());
        assert!(diag.code.is_none());
    }

    #[test]
    fn syntax_errors_keep_code_and_hint() {
        let text = "x = 1\ny = (\n";
        let index = LineIndex::new(text);
        let error = SyntaxError::new("unclosed `(`", range(10, 11), ErrorCode::E0203)
            .with_hint("the bracket is closed implicitly at the next statement");

        let diag = Diagnostic::from_syntax_error(path(), &error, &index);
        assert_eq!(diag.code.as_deref(), Some("E0203"));
        assert_eq!(diag.span.start, Position::new(1, 4));
        assert_eq!(
            diag.hint.as_deref(),
            Some("the bracket is closed implicitly at the next statement")
        );
        assert_eq!(diag.to_string(), "test.py:2:5: error[E0203]: unclosed `(`");
    }

    #[test]
    fn notes_alone_are_not_errors() {
        let mut collector = DiagnosticCollector::new();
        collector.add(
            Diagnostic::info(path(), range(0, 0), Span::default(), "salvaged")
                .with_code(codes::SALVAGED_DEFINITIONS),
        );
        assert!(!collector.has_errors());
        assert_eq!(collector.count(Severity::Info), 1);

        collector.add(Diagnostic::error(path(), range(4, 5), Span::default(), "bad"));
        assert!(collector.has_errors());
        assert_eq!(collector.count(Severity::Error), 1);
    }

    #[test]
    fn finish_orders_by_file_then_position() {
        let mut collector = DiagnosticCollector::new();
        collector.add(Diagnostic::info(path(), range(9, 9), Span::default(), "late"));
        collector.add(Diagnostic::error(path(), range(2, 3), Span::default(), "early"));
        collector.add(Diagnostic::error(Arc::from("a.py"), range(5, 6), Span::default(), "other"));

        let messages: Vec<_> = collector
            .finish()
            .into_iter()
            .map(|d| d.message.to_string())
            .collect();
        assert_eq!(messages, vec!["other", "early", "late"]);
    }

    #[test]
    fn severity_orders_most_serious_first() {
        assert!(Severity::Error < Severity::Warning);
        assert!(Severity::Info < Severity::Hint);
        assert_eq!(Severity::from(parser::Severity::Hint).to_string(), "hint");
    }
}

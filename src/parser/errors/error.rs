//! Syntax errors produced by the lexer and the parser.
//!
//! Every error is a value attached to the [`Parse`](crate::parser::Parse);
//! nothing here aborts parsing.

use std::fmt;

use rowan::TextRange;

use super::codes::ErrorCode;
use super::context::ParseContext;

/// How serious a syntax problem is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Hint,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Hint => "hint",
        }
    }
}

/// A secondary location, such as the opener of an unclosed bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub message: String,
    pub range: TextRange,
}

impl RelatedInfo {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// A located syntax problem.
///
/// `hint` describes how the parser recovered or what would fix the input,
/// e.g. "add 'def' before the function name".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
    pub code: ErrorCode,
    pub severity: Severity,
    pub hint: Option<String>,
    pub related: Vec<RelatedInfo>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            severity: Severity::Error,
            hint: None,
            related: Vec::new(),
        }
    }

    /// An error carrying the code's stock message.
    pub fn from_code(code: ErrorCode, range: TextRange) -> Self {
        Self::new(code.default_message(), range, code)
    }

    /// "unexpected `found` <where>, expected <what>" for the current context.
    pub fn unexpected(found: &str, context: ParseContext, range: TextRange) -> Self {
        let message = format!(
            "unexpected {found} {}, expected {}",
            context.description(),
            context.expected_description()
        );
        Self::new(message, range, ErrorCode::E0901)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn is_lexical(&self) -> bool {
        self.code.as_str().starts_with("E01")
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({hint})")?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

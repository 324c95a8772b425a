//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens, strings)
//! - E02xx: Layout errors (indentation, brackets)
//! - E03xx: Declaration errors (def, class, decorators)
//! - E04xx: Expression errors
//! - E05xx: Import errors
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for parser diagnostics
///
/// Each error code represents a specific category of parse error,
/// enabling filtering and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors (invalid tokens)
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,
    /// Unterminated string literal
    E0102,
    /// Unterminated triple-quoted string literal
    E0103,
    /// Invalid numeric literal
    E0104,
    /// Unbalanced braces in an f-string substitution
    E0105,

    // =========================================================================
    // E02xx: Layout errors (indentation, brackets, line structure)
    // =========================================================================
    /// Dedent to a level that was never opened
    E0201,
    /// Unclosed brace `{`
    E0202,
    /// Unclosed parenthesis `(`
    E0203,
    /// Unclosed bracket `[`
    E0204,
    /// Unexpected closing delimiter
    E0205,
    /// Expected an indented block
    E0206,
    /// Mismatched delimiters
    E0207,
    /// Unexpected indent
    E0208,
    /// Statements on one line without a separator
    E0209,
    /// Blocks nested deeper than the parser follows
    E0210,

    // =========================================================================
    // E03xx: Declaration errors (def, class, decorators)
    // =========================================================================
    /// Missing identifier/name
    E0301,
    /// Missing `def` keyword for a function definition
    E0302,
    /// Decorator not followed by a definition
    E0303,
    /// Missing parameter list
    E0304,
    /// Invalid parameter
    E0305,
    /// Clause (`else`, `except`, ...) without its statement
    E0306,
    /// Missing `:` before a block
    E0307,

    // =========================================================================
    // E04xx: Expression errors
    // =========================================================================
    /// Invalid expression
    E0401,
    /// Missing operand in expression
    E0402,
    /// Invalid operator
    E0403,
    /// Unclosed function call
    E0404,
    /// Invalid argument in function call
    E0405,
    /// Missing expression where expected
    E0406,
    /// Invalid assignment target
    E0407,
    /// Expression nested deeper than the parser follows
    E0408,

    // =========================================================================
    // E05xx: Import errors
    // =========================================================================
    /// Invalid import path
    E0501,
    /// Missing `import` after `from ...`
    E0502,
    /// Invalid alias
    E0503,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Unexpected token in current context
    E0901,
    /// Expected a specific token
    E0902,
    /// Internal parser error
    E0999,
}

impl ErrorCode {
    /// Every defined code, in numeric order
    pub const ALL: &'static [ErrorCode] = &[
        Self::E0101,
        Self::E0102,
        Self::E0103,
        Self::E0104,
        Self::E0105,
        Self::E0201,
        Self::E0202,
        Self::E0203,
        Self::E0204,
        Self::E0205,
        Self::E0206,
        Self::E0207,
        Self::E0208,
        Self::E0209,
        Self::E0210,
        Self::E0301,
        Self::E0302,
        Self::E0303,
        Self::E0304,
        Self::E0305,
        Self::E0306,
        Self::E0307,
        Self::E0401,
        Self::E0402,
        Self::E0403,
        Self::E0404,
        Self::E0405,
        Self::E0406,
        Self::E0407,
        Self::E0408,
        Self::E0501,
        Self::E0502,
        Self::E0503,
        Self::E0901,
        Self::E0902,
        Self::E0999,
    ];

    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexical
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0105 => "E0105",
            // Layout
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0206 => "E0206",
            Self::E0207 => "E0207",
            Self::E0208 => "E0208",
            Self::E0209 => "E0209",
            Self::E0210 => "E0210",
            // Declaration
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            Self::E0306 => "E0306",
            Self::E0307 => "E0307",
            // Expression
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0404 => "E0404",
            Self::E0405 => "E0405",
            Self::E0406 => "E0406",
            Self::E0407 => "E0407",
            Self::E0408 => "E0408",
            // Import
            Self::E0501 => "E0501",
            Self::E0502 => "E0502",
            Self::E0503 => "E0503",
            // Generic
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
            Self::E0999 => "E0999",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 | Self::E0105 => "lexical error",
            Self::E0201
            | Self::E0202
            | Self::E0203
            | Self::E0204
            | Self::E0205
            | Self::E0206
            | Self::E0207
            | Self::E0208
            | Self::E0209
            | Self::E0210 => "layout error",
            Self::E0301
            | Self::E0302
            | Self::E0303
            | Self::E0304
            | Self::E0305
            | Self::E0306
            | Self::E0307 => "declaration error",
            Self::E0401
            | Self::E0402
            | Self::E0403
            | Self::E0404
            | Self::E0405
            | Self::E0406
            | Self::E0407
            | Self::E0408 => "expression error",
            Self::E0501 | Self::E0502 | Self::E0503 => "import error",
            Self::E0901 | Self::E0902 | Self::E0999 => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            // Lexical
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated string literal",
            Self::E0103 => "unterminated triple-quoted string literal",
            Self::E0104 => "invalid numeric literal",
            Self::E0105 => "unbalanced f-string substitution",
            // Layout
            Self::E0201 => "inconsistent dedent",
            Self::E0202 => "unclosed brace",
            Self::E0203 => "unclosed parenthesis",
            Self::E0204 => "unclosed bracket",
            Self::E0205 => "unexpected closing delimiter",
            Self::E0206 => "expected an indented block",
            Self::E0207 => "mismatched delimiters",
            Self::E0208 => "unexpected indent",
            Self::E0209 => "expected end of statement",
            Self::E0210 => "too many nested blocks",
            // Declaration
            Self::E0301 => "missing identifier",
            Self::E0302 => "missing 'def' keyword",
            Self::E0303 => "decorator without definition",
            Self::E0304 => "missing parameter list",
            Self::E0305 => "invalid parameter",
            Self::E0306 => "clause without matching statement",
            Self::E0307 => "expected ':'",
            // Expression
            Self::E0401 => "invalid expression",
            Self::E0402 => "missing operand",
            Self::E0403 => "invalid operator",
            Self::E0404 => "unclosed function call",
            Self::E0405 => "invalid argument",
            Self::E0406 => "expected expression",
            Self::E0407 => "invalid assignment target",
            Self::E0408 => "expression is nested too deeply",
            // Import
            Self::E0501 => "invalid import path",
            Self::E0502 => "expected 'import'",
            Self::E0503 => "invalid alias",
            // Generic
            Self::E0901 => "unexpected token",
            Self::E0902 => "expected token",
            Self::E0999 => "internal parser error",
        }
    }

    /// Check if this is a layout error (indentation or delimiters)
    pub fn is_layout(&self) -> bool {
        self.as_str().starts_with("E02")
    }

    /// Check if this is a recoverable error (parsing can continue)
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::E0999)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

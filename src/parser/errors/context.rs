//! Parse context tracking for context-aware error messages
//!
//! The parser maintains a stack of contexts to generate more helpful
//! error messages that indicate where in the source structure the error occurred.

use crate::parser::SyntaxKind;

/// Represents the current parsing context
///
/// Used to generate context-aware error messages and determine
/// appropriate recovery strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseContext {
    /// At the top level of a module
    #[default]
    TopLevel,
    /// Inside a class body
    ClassBody,
    /// Inside a function body
    FunctionBody,
    /// Inside the body of an `if`/`for`/`while`/`try`/`with`
    Block,

    // Header contexts
    /// Parsing a `class` header
    ClassHeader,
    /// Parsing a `def` header
    FunctionHeader,
    /// Parsing a decorator line
    Decorator,

    // Other contexts
    /// Parsing an expression
    Expression,
    /// Parsing a type annotation
    TypeAnnotation,
    /// Parsing an import statement
    Import,
    /// Parsing a parameter list
    ParameterList,
    /// Parsing an argument list
    ArgumentList,
    /// Parsing a subscript
    Subscript,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at module level",
            Self::ClassBody => "in class body",
            Self::FunctionBody => "in function body",
            Self::Block => "in block",

            Self::ClassHeader => "in class header",
            Self::FunctionHeader => "in function header",
            Self::Decorator => "in decorator",

            Self::Expression => "in expression",
            Self::TypeAnnotation => "in type annotation",
            Self::Import => "in import statement",
            Self::ParameterList => "in parameter list",
            Self::ArgumentList => "in argument list",
            Self::Subscript => "in subscript",
        }
    }

    /// Get a description of what tokens are expected in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::TopLevel | Self::FunctionBody | Self::Block => "a statement",
            Self::ClassBody => "a method, attribute, or nested class",

            Self::ClassHeader => "base classes and ':'",
            Self::FunctionHeader => "a parameter list and ':'",
            Self::Decorator => "a decorator expression followed by a newline",

            Self::Expression => "an expression (literal, name, or operator)",
            Self::TypeAnnotation => "a type expression",
            Self::Import => "a module path",
            Self::ParameterList => "a parameter",
            Self::ArgumentList => "an argument",
            Self::Subscript => "an index or slice",
        }
    }

    /// Get the recovery tokens appropriate for this context
    pub fn recovery_tokens(&self) -> &'static [SyntaxKind] {
        match self {
            Self::Expression | Self::ArgumentList => &[
                SyntaxKind::NEWLINE,
                SyntaxKind::R_PAREN,
                SyntaxKind::R_BRACE,
                SyntaxKind::R_BRACKET,
                SyntaxKind::COMMA,
            ],
            Self::ParameterList => &[
                SyntaxKind::NEWLINE,
                SyntaxKind::R_PAREN,
                SyntaxKind::COMMA,
                SyntaxKind::COLON,
            ],
            Self::Subscript => &[SyntaxKind::NEWLINE, SyntaxKind::R_BRACKET, SyntaxKind::COMMA],
            Self::ClassHeader | Self::FunctionHeader | Self::TypeAnnotation => {
                &[SyntaxKind::NEWLINE, SyntaxKind::COLON]
            }
            _ => &[SyntaxKind::NEWLINE, SyntaxKind::DEDENT],
        }
    }

    /// Check if this context is inside a definition header
    pub fn is_in_header(&self) -> bool {
        matches!(
            self,
            Self::ClassHeader | Self::FunctionHeader | Self::Decorator | Self::ParameterList
        )
    }

    /// Check if this context is a statement sequence
    pub fn is_in_body(&self) -> bool {
        matches!(
            self,
            Self::TopLevel | Self::ClassBody | Self::FunctionBody | Self::Block
        )
    }
}

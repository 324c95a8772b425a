//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! It follows the structure of the Python 3 grammar.

/// All syntax kinds (tokens and nodes) of a Python source file
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation, layout).
/// Nodes are composite (definitions, statements, expressions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    COMMENT,           // # ...
    LINE_CONTINUATION, // backslash-newline
    BLANK_LINE,        // newline that does not end a logical line

    // =========================================================================
    // LAYOUT (synthesized from indentation)
    // =========================================================================
    NEWLINE, // end of a logical line
    INDENT,  // zero-width
    DEDENT,  // zero-width
    EOF,     // zero-width, always last

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,            // identifier
    INT_NUMBER,       // 42, 0x2a, 1_000
    FLOAT_NUMBER,     // 3.14, 1e10
    IMAGINARY_NUMBER, // 2j
    STRING,           // 'a', "a", '''a''', r"a"
    BYTES,            // b'a'
    FSTRING,          // f'{a}'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,        // (
    R_PAREN,        // )
    L_BRACKET,      // [
    R_BRACKET,      // ]
    L_BRACE,        // {
    R_BRACE,        // }
    COLON,          // :
    COLON_EQ,       // :=
    SEMICOLON,      // ;
    COMMA,          // ,
    DOT,            // .
    ELLIPSIS,       // ...
    ARROW,          // ->
    AT,             // @
    AT_EQ,          // @=
    EQ,             // =
    EQ_EQ,          // ==
    BANG_EQ,        // !=
    LT,             // <
    GT,             // >
    LT_EQ,          // <=
    GT_EQ,          // >=
    LT_GT,          // <> (legacy, reported as an error by the parser)
    PLUS,           // +
    MINUS,          // -
    STAR,           // *
    STAR_STAR,      // **
    SLASH,          // /
    SLASH_SLASH,    // //
    PERCENT,        // %
    AMP,            // &
    PIPE,           // |
    CARET,          // ^
    TILDE,          // ~
    SHL,            // <<
    SHR,            // >>
    PLUS_EQ,        // +=
    MINUS_EQ,       // -=
    STAR_EQ,        // *=
    STAR_STAR_EQ,   // **=
    SLASH_EQ,       // /=
    SLASH_SLASH_EQ, // //=
    PERCENT_EQ,     // %=
    AMP_EQ,         // &=
    PIPE_EQ,        // |=
    CARET_EQ,       // ^=
    SHL_EQ,         // <<=
    SHR_EQ,         // >>=
    BANG,           // ! (only valid inside f-string conversions)

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    FALSE_KW,
    NONE_KW,
    TRUE_KW,
    AND_KW,
    AS_KW,
    ASSERT_KW,
    ASYNC_KW,
    AWAIT_KW,
    BREAK_KW,
    CLASS_KW,
    CONTINUE_KW,
    DEF_KW,
    DEL_KW,
    ELIF_KW,
    ELSE_KW,
    EXCEPT_KW,
    FINALLY_KW,
    FOR_KW,
    FROM_KW,
    GLOBAL_KW,
    IF_KW,
    IMPORT_KW,
    IN_KW,
    IS_KW,
    LAMBDA_KW,
    NONLOCAL_KW,
    NOT_KW,
    OR_KW,
    PASS_KW,
    RAISE_KW,
    RETURN_KW,
    TRY_KW,
    WHILE_KW,
    WITH_KW,
    YIELD_KW,

    // =========================================================================
    // NODES: definitions
    // =========================================================================
    SOURCE_FILE,
    FUNCTION_DEF,
    CLASS_DEF,
    DECORATOR,
    NAME,
    PARAM_LIST,
    PARAM,
    PARAM_DEFAULT,
    RETURN_TYPE,
    TYPE_PARAMS,
    ARG_LIST,
    KEYWORD_ARG,
    BLOCK,

    // =========================================================================
    // NODES: imports
    // =========================================================================
    IMPORT_STMT,
    IMPORT_FROM_STMT,
    IMPORT_ALIAS,
    DOTTED_NAME,

    // =========================================================================
    // NODES: simple statements
    // =========================================================================
    ASSIGNMENT,
    TYPE_ANNOTATION,
    AUG_ASSIGN,
    EXPR_STMT,
    RETURN_STMT,
    PASS_STMT,
    BREAK_STMT,
    CONTINUE_STMT,
    RAISE_STMT,
    GLOBAL_STMT,
    NONLOCAL_STMT,
    DEL_STMT,
    ASSERT_STMT,

    // =========================================================================
    // NODES: compound statements
    // =========================================================================
    IF_STMT,
    ELIF_CLAUSE,
    ELSE_CLAUSE,
    WHILE_STMT,
    FOR_STMT,
    TRY_STMT,
    EXCEPT_CLAUSE,
    FINALLY_CLAUSE,
    WITH_STMT,
    WITH_ITEM,

    // =========================================================================
    // NODES: expressions
    // =========================================================================
    NAME_REF,
    LITERAL,
    PAREN_EXPR,
    TUPLE_EXPR,
    LIST_EXPR,
    DICT_EXPR,
    SET_EXPR,
    DICT_ENTRY,
    COMPREHENSION,
    COMP_FOR,
    COMP_IF,
    CALL_EXPR,
    ATTR_EXPR,
    SUBSCRIPT_EXPR,
    SLICE,
    BIN_EXPR,
    UNARY_EXPR,
    CONDITIONAL_EXPR,
    LAMBDA_EXPR,
    AWAIT_EXPR,
    YIELD_EXPR,
    STARRED_EXPR,
    NAMED_EXPR,

    // Special
    ERROR,
    TOMBSTONE,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace, comments, non-logical newlines)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::COMMENT | Self::LINE_CONTINUATION | Self::BLANK_LINE
        )
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::FALSE_KW as u16) && (self as u16) <= (Self::YIELD_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_PAREN as u16) && (self as u16) <= (Self::BANG as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::INT_NUMBER
                | Self::FLOAT_NUMBER
                | Self::IMAGINARY_NUMBER
                | Self::STRING
                | Self::BYTES
                | Self::FSTRING
        )
    }

    /// Check if this is a string-like literal
    pub fn is_string(self) -> bool {
        matches!(self, Self::STRING | Self::BYTES | Self::FSTRING)
    }

    /// Check if this is one of the zero-width layout tokens
    pub fn is_layout(self) -> bool {
        matches!(self, Self::INDENT | Self::DEDENT | Self::EOF)
    }

    /// Check if this is an augmented assignment operator
    pub fn is_aug_assign(self) -> bool {
        (self as u16) >= (Self::PLUS_EQ as u16) && (self as u16) <= (Self::SHR_EQ as u16)
            || self == Self::AT_EQ
    }
}

impl SyntaxKind {
    /// Source text of a punctuation token
    pub fn punct_text(self) -> Option<&'static str> {
        let text = match self {
            Self::L_PAREN => "(",
            Self::R_PAREN => ")",
            Self::L_BRACKET => "[",
            Self::R_BRACKET => "]",
            Self::L_BRACE => "{",
            Self::R_BRACE => "}",
            Self::COLON => ":",
            Self::COLON_EQ => ":=",
            Self::SEMICOLON => ";",
            Self::COMMA => ",",
            Self::DOT => ".",
            Self::ELLIPSIS => "...",
            Self::ARROW => "->",
            Self::AT => "@",
            Self::AT_EQ => "@=",
            Self::EQ => "=",
            Self::EQ_EQ => "==",
            Self::BANG_EQ => "!=",
            Self::LT => "<",
            Self::GT => ">",
            Self::LT_EQ => "<=",
            Self::GT_EQ => ">=",
            Self::LT_GT => "<>",
            Self::PLUS => "+",
            Self::MINUS => "-",
            Self::STAR => "*",
            Self::STAR_STAR => "**",
            Self::SLASH => "/",
            Self::SLASH_SLASH => "//",
            Self::PERCENT => "%",
            Self::AMP => "&",
            Self::PIPE => "|",
            Self::CARET => "^",
            Self::TILDE => "~",
            Self::SHL => "<<",
            Self::SHR => ">>",
            Self::PLUS_EQ => "+=",
            Self::MINUS_EQ => "-=",
            Self::STAR_EQ => "*=",
            Self::STAR_STAR_EQ => "**=",
            Self::SLASH_EQ => "/=",
            Self::SLASH_SLASH_EQ => "//=",
            Self::PERCENT_EQ => "%=",
            Self::AMP_EQ => "&=",
            Self::PIPE_EQ => "|=",
            Self::CARET_EQ => "^=",
            Self::SHL_EQ => "<<=",
            Self::SHR_EQ => ">>=",
            Self::BANG => "!",
            _ => return None,
        };
        Some(text)
    }

    /// Human-readable name used in diagnostics
    pub fn describe(self) -> String {
        if self.is_keyword() {
            let index = (self as u16 - Self::FALSE_KW as u16) as usize;
            return format!("'{}'", super::keywords::KEYWORDS[index]);
        }
        if let Some(text) = self.punct_text() {
            return format!("'{text}'");
        }
        let name = match self {
            Self::NEWLINE => "newline",
            Self::INDENT => "indent",
            Self::DEDENT => "dedent",
            Self::EOF => "end of file",
            Self::IDENT => "identifier",
            Self::INT_NUMBER | Self::FLOAT_NUMBER | Self::IMAGINARY_NUMBER => "number",
            Self::STRING | Self::BYTES | Self::FSTRING => "string",
            Self::ERROR => "invalid token",
            _ => "syntax",
        };
        name.to_string()
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PythonLanguage {}

impl rowan::Language for PythonLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<PythonLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<PythonLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<PythonLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<PythonLanguage>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(SyntaxKind::DEF_KW.describe(), "'def'");
        assert_eq!(SyntaxKind::YIELD_KW.describe(), "'yield'");
        assert_eq!(SyntaxKind::COLON.describe(), "':'");
        assert_eq!(SyntaxKind::NEWLINE.describe(), "newline");
    }

    #[test]
    fn test_classification() {
        assert!(SyntaxKind::COMMENT.is_trivia());
        assert!(!SyntaxKind::NEWLINE.is_trivia());
        assert!(SyntaxKind::FALSE_KW.is_keyword());
        assert!(!SyntaxKind::IDENT.is_keyword());
        assert!(SyntaxKind::SHR_EQ.is_aug_assign());
        assert!(SyntaxKind::AT_EQ.is_aug_assign());
        assert!(!SyntaxKind::EQ.is_aug_assign());
    }

    #[test]
    fn test_raw_roundtrip() {
        let raw: rowan::SyntaxKind = SyntaxKind::CLASS_DEF.into();
        assert_eq!(SyntaxKind::from(raw), SyntaxKind::CLASS_DEF);
    }
}

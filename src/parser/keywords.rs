//! Python keyword tables.
//!
//! Hard keywords are lexed as identifiers and mapped here, so `default` or
//! `classes` never split into a keyword prefix.

use super::syntax_kind::SyntaxKind;

/// All hard keywords, in the order of their `SyntaxKind`s.
pub const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Soft keywords are ordinary identifiers to this parser.
pub const SOFT_KEYWORDS: &[&str] = &["match", "case", "type", "_"];

/// Map identifier text to its keyword kind.
pub fn keyword_kind(text: &str) -> Option<SyntaxKind> {
    let kind = match text {
        "False" => SyntaxKind::FALSE_KW,
        "None" => SyntaxKind::NONE_KW,
        "True" => SyntaxKind::TRUE_KW,
        "and" => SyntaxKind::AND_KW,
        "as" => SyntaxKind::AS_KW,
        "assert" => SyntaxKind::ASSERT_KW,
        "async" => SyntaxKind::ASYNC_KW,
        "await" => SyntaxKind::AWAIT_KW,
        "break" => SyntaxKind::BREAK_KW,
        "class" => SyntaxKind::CLASS_KW,
        "continue" => SyntaxKind::CONTINUE_KW,
        "def" => SyntaxKind::DEF_KW,
        "del" => SyntaxKind::DEL_KW,
        "elif" => SyntaxKind::ELIF_KW,
        "else" => SyntaxKind::ELSE_KW,
        "except" => SyntaxKind::EXCEPT_KW,
        "finally" => SyntaxKind::FINALLY_KW,
        "for" => SyntaxKind::FOR_KW,
        "from" => SyntaxKind::FROM_KW,
        "global" => SyntaxKind::GLOBAL_KW,
        "if" => SyntaxKind::IF_KW,
        "import" => SyntaxKind::IMPORT_KW,
        "in" => SyntaxKind::IN_KW,
        "is" => SyntaxKind::IS_KW,
        "lambda" => SyntaxKind::LAMBDA_KW,
        "nonlocal" => SyntaxKind::NONLOCAL_KW,
        "not" => SyntaxKind::NOT_KW,
        "or" => SyntaxKind::OR_KW,
        "pass" => SyntaxKind::PASS_KW,
        "raise" => SyntaxKind::RAISE_KW,
        "return" => SyntaxKind::RETURN_KW,
        "try" => SyntaxKind::TRY_KW,
        "while" => SyntaxKind::WHILE_KW,
        "with" => SyntaxKind::WITH_KW,
        "yield" => SyntaxKind::YIELD_KW,
        _ => return None,
    };
    Some(kind)
}

/// Check if text is a hard keyword
pub fn is_keyword(text: &str) -> bool {
    keyword_kind(text).is_some()
}

/// Keywords that can only begin a statement, never continue an expression.
///
/// Seeing one of these at the start of a physical line inside an open
/// bracket is a strong sign the bracket was never closed.
pub fn is_statement_only_keyword(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::DEF_KW
            | SyntaxKind::CLASS_KW
            | SyntaxKind::RETURN_KW
            | SyntaxKind::PASS_KW
            | SyntaxKind::IMPORT_KW
            | SyntaxKind::WHILE_KW
            | SyntaxKind::TRY_KW
            | SyntaxKind::EXCEPT_KW
            | SyntaxKind::FINALLY_KW
            | SyntaxKind::WITH_KW
            | SyntaxKind::RAISE_KW
            | SyntaxKind::DEL_KW
            | SyntaxKind::GLOBAL_KW
            | SyntaxKind::NONLOCAL_KW
            | SyntaxKind::ASSERT_KW
            | SyntaxKind::BREAK_KW
            | SyntaxKind::CONTINUE_KW
            | SyntaxKind::ELIF_KW
    )
}

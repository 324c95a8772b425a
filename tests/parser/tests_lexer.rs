//! Token classification through the public lexer API.

use codeindex::keywords::{is_keyword, keyword_kind};
use codeindex::parser::{ErrorCode, Lexer, SyntaxKind, tokenize};
use rstest::rstest;

fn significant_kinds(input: &str) -> Vec<SyntaxKind> {
    tokenize(input)
        .into_iter()
        .map(|t| t.kind)
        .filter(|k| !k.is_trivia() && *k != SyntaxKind::EOF)
        .collect()
}

fn lex_error_codes(input: &str) -> Vec<ErrorCode> {
    let mut lexer = Lexer::new(input);
    lexer.by_ref().for_each(drop);
    lexer.into_errors().into_iter().map(|e| e.code).collect()
}

#[rstest]
#[case("def", SyntaxKind::DEF_KW)]
#[case("class", SyntaxKind::CLASS_KW)]
#[case("async", SyntaxKind::ASYNC_KW)]
#[case("await", SyntaxKind::AWAIT_KW)]
#[case("yield", SyntaxKind::YIELD_KW)]
#[case("lambda", SyntaxKind::LAMBDA_KW)]
#[case("None", SyntaxKind::NONE_KW)]
#[case("nonlocal", SyntaxKind::NONLOCAL_KW)]
fn test_hard_keywords(#[case] text: &str, #[case] expected: SyntaxKind) {
    assert_eq!(keyword_kind(text), Some(expected));
    assert_eq!(significant_kinds(text)[0], expected);
}

#[rstest]
#[case("match")]
#[case("case")]
#[case("type")]
#[case("_")]
#[case("self")]
#[case("print")]
fn test_soft_keywords_are_identifiers(#[case] text: &str) {
    assert!(!is_keyword(text));
    assert_eq!(significant_kinds(text)[0], SyntaxKind::IDENT);
}

#[rstest]
#[case("'single'", SyntaxKind::STRING)]
#[case("\"double\"", SyntaxKind::STRING)]
#[case("'''triple\nline'''", SyntaxKind::STRING)]
#[case("r'\\d+'", SyntaxKind::STRING)]
#[case("b'\\x00'", SyntaxKind::BYTES)]
#[case("f'{x}'", SyntaxKind::FSTRING)]
#[case("rf\"{x}\\n\"", SyntaxKind::FSTRING)]
#[case("42", SyntaxKind::INT_NUMBER)]
#[case("0o17", SyntaxKind::INT_NUMBER)]
#[case("1e10", SyntaxKind::FLOAT_NUMBER)]
#[case("2j", SyntaxKind::IMAGINARY_NUMBER)]
fn test_literals_are_single_tokens(#[case] text: &str, #[case] expected: SyntaxKind) {
    let tokens = tokenize(text);
    assert_eq!(tokens[0].kind, expected);
    assert_eq!(tokens[0].text, text);
}

#[test]
fn test_fstring_with_reused_quote() {
    let input = "label = f\"Value for key1: {my_dict[\"key1\"]}\"\n";
    let fstrings: Vec<_> = tokenize(input)
        .into_iter()
        .filter(|t| t.kind == SyntaxKind::FSTRING)
        .collect();
    assert_eq!(fstrings.len(), 1);
    assert!(lex_error_codes(input).is_empty());
}

#[test]
fn test_unbalanced_fstring_reports_once() {
    let input = "a = f'{x'\nb = 1\n";
    assert_eq!(lex_error_codes(input), vec![ErrorCode::E0105]);
}

#[test]
fn test_layout_tokens_for_nested_blocks() {
    let kinds = significant_kinds("class A:\n    def f(self):\n        pass\nx = 1\n");
    let indents = kinds.iter().filter(|k| **k == SyntaxKind::INDENT).count();
    let dedents = kinds.iter().filter(|k| **k == SyntaxKind::DEDENT).count();
    assert_eq!(indents, 2);
    assert_eq!(dedents, 2);
}

#[test]
fn test_comment_lines_do_not_change_indentation() {
    let kinds = significant_kinds("if x:\n    a = 1\n# column zero\n    b = 2\n");
    assert_eq!(
        kinds.iter().filter(|k| **k == SyntaxKind::DEDENT).count(),
        1
    );
    assert_eq!(
        kinds.iter().filter(|k| **k == SyntaxKind::INDENT).count(),
        1
    );
}

#[rstest]
#[case("x = 'open\n", ErrorCode::E0102)]
#[case("x = '''never closed\n", ErrorCode::E0103)]
#[case("x = 1 ? 2\n", ErrorCode::E0101)]
#[case("x = [1, 2\n", ErrorCode::E0204)]
fn test_lexical_errors(#[case] input: &str, #[case] expected: ErrorCode) {
    assert_eq!(lex_error_codes(input), vec![expected]);
}

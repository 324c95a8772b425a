//! Error recovery: every problem is reported and parsing continues.

use std::time::{Duration, Instant};

use codeindex::parser::{ErrorCode, Severity, SourceFile, Statement, SyntaxKind, parse};
use rstest::rstest;

use crate::helpers::{on_small_stack, source_fixtures};

fn codes(input: &str) -> Vec<ErrorCode> {
    parse(input).errors.iter().map(|e| e.code).collect()
}

fn top_level(input: &str) -> Vec<Statement> {
    let parsed = parse(input);
    let file: SourceFile = parsed.source_file().unwrap();
    file.statements().collect()
}

#[test]
fn test_well_formed_fixtures_parse_cleanly() {
    for source in [
        source_fixtures::CLASSES,
        source_fixtures::FUNCTIONS,
        source_fixtures::IMPORTS,
        source_fixtures::STRINGS,
    ] {
        let parsed = parse(source);
        assert!(parsed.ok(), "unexpected errors: {:?}", parsed.errors);
    }
}

#[test]
fn test_missing_def_is_one_error() {
    let parsed = parse(source_fixtures::MISSING_DEF);
    let errors: Vec<_> = parsed
        .errors
        .iter()
        .filter(|e| e.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::E0302);
    assert!(errors[0].hint.is_some());

    let start = u32::from(errors[0].range.start()) as usize;
    assert!(source_fixtures::MISSING_DEF[start..].starts_with("update(self, key, value):"));
}

#[test]
fn test_missing_colon_keeps_definition() {
    let statements = top_level("def f()\n    return 1\n\ndef g():\n    pass\n");
    let defs = statements
        .iter()
        .filter(|s| matches!(s, Statement::FunctionDef(_)))
        .count();
    assert_eq!(defs, 2);
}

#[test]
fn test_errors_are_sorted_by_position() {
    let parsed = parse("x = (\ny = 'open\ndef f(:\n    pass\n$\n");
    assert!(parsed.errors.len() >= 3);
    assert!(
        parsed
            .errors
            .windows(2)
            .all(|pair| pair[0].range.start() <= pair[1].range.start())
    );
}

#[test]
fn test_unexpected_indent_is_reported_and_skipped() {
    let input = "a = 1\n        b = 2\nc = 3\n";
    assert!(!codes(input).is_empty());
    let assignments = top_level(input)
        .iter()
        .filter(|s| matches!(s, Statement::Assignment(_)))
        .count();
    assert!(assignments >= 2);
}

#[test]
fn test_unclosed_bracket_does_not_swallow_next_definition() {
    let statements = top_level("x = foo(1,\ndef g():\n    pass\n");
    assert!(
        statements
            .iter()
            .any(|s| matches!(s, Statement::FunctionDef(_)))
    );
    assert!(codes("x = foo(1,\ndef g():\n    pass\n").contains(&ErrorCode::E0203));
}

/// Parse on a small stack, returning the error codes and whether the tree
/// text still equals the input.
fn parse_deep(input: String) -> (Vec<ErrorCode>, bool) {
    on_small_stack(move || {
        let parsed = parse(&input);
        let lossless = parsed.syntax().text() == input.as_str();
        (parsed.errors.iter().map(|e| e.code).collect(), lossless)
    })
}

#[rstest]
#[case::unclosed_brackets(format!("x = {}", "[".repeat(20_000)))]
#[case::unclosed_parens(format!("x = {}\n", "(".repeat(5_000)))]
#[case::balanced_parens(format!("x = {}1{}\n", "(".repeat(5_000), ")".repeat(5_000)))]
#[case::nested_calls(format!("x = {}{}\n", "f(".repeat(5_000), ")".repeat(5_000)))]
#[case::nested_subscripts(format!("x = a{}\n", "[a".repeat(5_000)))]
#[case::unary_minus(format!("x = {}1\n", "-".repeat(20_000)))]
#[case::not_chain(format!("x = {}y\n", "not ".repeat(20_000)))]
#[case::lambda_chain(format!("x = {}0\n", "lambda: ".repeat(5_000)))]
#[case::power_chain(format!("x = 2{}\n", "**2".repeat(5_000)))]
fn test_deep_expression_is_cut_off(#[case] input: String) {
    let (codes, lossless) = parse_deep(input);
    assert!(lossless);
    assert_eq!(
        codes.iter().filter(|c| **c == ErrorCode::E0408).count(),
        1,
        "{codes:?}"
    );
}

#[test]
fn test_moderate_nesting_is_not_an_error() {
    let input = format!("x = {}1{}\n", "[".repeat(50), "]".repeat(50));
    assert!(parse(&input).ok());
}

#[test]
fn test_deep_expression_does_not_hide_next_statement() {
    let input = format!("x = {}\ndef g():\n    pass\n", "-".repeat(5_000));
    let has_def = on_small_stack(move || {
        top_level(&input)
            .iter()
            .any(|s| matches!(s, Statement::FunctionDef(_)))
    });
    assert!(has_def);
}

#[test]
fn test_deep_blocks_are_cut_off() {
    let (codes, lossless) = parse_deep(source_fixtures::nested_blocks(3_000));
    assert!(lossless);
    assert_eq!(codes, vec![ErrorCode::E0210]);
}

#[test]
fn test_long_unclosed_with_header_is_linear() {
    let input = format!("with ({}\n", "a, ".repeat(50_000));
    let started = Instant::now();
    let parsed = parse(&input);
    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(parsed.errors.iter().any(|e| e.code == ErrorCode::E0203));
    assert_eq!(parsed.syntax().text().to_string(), input);
}

#[rstest]
#[case("with (a as b, c):\n    pass\n", 2)]
#[case("with (a, b)[0]:\n    pass\n", 1)]
#[case("with (open(p)) as f:\n    pass\n", 1)]
fn test_with_items_parenthesized_or_not(#[case] input: &str, #[case] items: usize) {
    let parsed = parse(input);
    assert!(parsed.ok(), "{:?}", parsed.errors);
    let with = parsed
        .syntax()
        .descendants()
        .find(|n| n.kind() == SyntaxKind::WITH_STMT)
        .unwrap();
    let found = with
        .children()
        .filter(|n| n.kind() == SyntaxKind::WITH_ITEM)
        .count();
    assert_eq!(found, items);
}

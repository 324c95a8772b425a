use super::*;
use crate::parser::{SyntaxKind, parse};
use rowan::TextSize;

#[test]
fn every_code_is_documented() {
    for &code in ErrorCode::ALL {
        let s = code.as_str();
        assert!(s.starts_with('E') && s.len() == 5, "bad code string {s}");
        assert!(!code.default_message().is_empty(), "{s} has no message");
        assert!(!code.category_description().is_empty(), "{s} has no category");
    }
}

#[test]
fn recovery_sets_stop_at_statement_boundaries() {
    for ctx in [
        ParseContext::TopLevel,
        ParseContext::ClassBody,
        ParseContext::FunctionHeader,
        ParseContext::Expression,
        ParseContext::ArgumentList,
        ParseContext::Import,
    ] {
        let tokens = ctx.recovery_tokens();
        assert!(
            tokens
                .iter()
                .any(|t| matches!(t, SyntaxKind::NEWLINE | SyntaxKind::DEDENT)),
            "{ctx:?} would skip past the end of a statement"
        );
    }
}

#[test]
fn missing_def_reports_recovery_hint() {
    let text = "class C:\n    update(self, key):\n        pass\n";
    let parse = parse(text);
    let err = parse
        .errors
        .iter()
        .find(|e| e.code == ErrorCode::E0302)
        .unwrap();
    assert_eq!(err.range.start(), TextSize::new(13));
    assert_eq!(&text[err.range], "update(self, key):");
    assert_eq!(err.hint.as_deref(), Some("add 'def' before the function name"));
}

#[test]
fn unnamed_def_is_a_declaration_error() {
    let parse = parse("def (x):\n    pass\n");
    assert!(!parse.ok());
    assert!(parse.errors.iter().any(|e| e.code == ErrorCode::E0301));
}

#[test]
fn unclosed_bracket_points_at_opener() {
    let parse = parse("y = (1,\n");
    let err = parse
        .errors
        .iter()
        .find(|e| e.code == ErrorCode::E0203)
        .unwrap();
    assert_eq!(err.range.start(), TextSize::new(4));
}

#[test]
fn lexer_and_parser_errors_are_merged_in_order() {
    let parse = parse("x = 'open\ny = (1,\n");
    let offsets: Vec<_> = parse.errors.iter().map(|e| e.range.start()).collect();
    assert!(offsets.is_sorted());
    assert!(parse.errors.iter().any(|e| e.code == ErrorCode::E0102 && e.is_lexical()));
    assert!(parse.errors.iter().any(|e| e.code == ErrorCode::E0203));
}

//! The tree text always equals the input, whatever the input.

use codeindex::parser::{SyntaxKind, parse};
use rstest::rstest;

use crate::helpers::source_fixtures;

fn assert_lossless(input: &str) {
    let parsed = parse(input);
    let root = parsed.syntax();
    assert_eq!(root.kind(), SyntaxKind::SOURCE_FILE);
    assert_eq!(root.text().to_string(), input);
    for node in root.descendants() {
        let range = node.text_range();
        for child in node.children_with_tokens() {
            assert!(
                range.contains_range(child.text_range()),
                "{:?} at {:?} escapes its parent {:?} at {range:?}",
                child.kind(),
                child.text_range(),
                node.kind(),
            );
        }
    }
}

#[test]
fn test_fixtures_round_trip() {
    for (_, source) in source_fixtures::ALL {
        assert_lossless(source);
    }
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("# only a comment")]
#[case("x = 1")]
#[case("def f(:\n")]
#[case("class (Base):\n    pass\n")]
#[case("if x\n    y\n")]
#[case(")))\n(((\n")]
#[case("   indented_first_line = 1\n")]
#[case("s = '''unterminated\n\n")]
#[case("x = f\"{unbalanced\"\n")]
#[case("def f():\nreturn 1\n")]
#[case("\tmixed = 1\n        more = 2\n")]
#[case("@\ndef f(): pass\n")]
#[case("from import x\n")]
#[case("x = (1,\ndef g():\n    pass\n")]
fn test_malformed_input_round_trips(#[case] input: &str) {
    assert_lossless(input);
}

#[test]
fn test_crlf_line_endings() {
    assert_lossless("def f():\r\n    return 1\r\n\r\nclass A:\r\n    pass\r\n");
}

#[test]
fn test_unicode_identifiers_and_strings() {
    assert_lossless("naïve = 'café'\nπ = 3.14\ndef 函数():\n    return '🦀'\n");
}

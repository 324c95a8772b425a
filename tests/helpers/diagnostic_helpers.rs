//! Diagnostic assertion helpers.

use codeindex::hir::{Diagnostic, Severity};

/// Diagnostics of error severity.
pub fn errors(diagnostics: &[Diagnostic]) -> Vec<&Diagnostic> {
    diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .collect()
}

/// Assert that no diagnostic has error severity.
pub fn assert_no_errors(diagnostics: &[Diagnostic]) {
    let errors = errors(diagnostics);
    assert!(
        errors.is_empty(),
        "Expected no errors, got:\n{}",
        errors
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Assert a diagnostic with `code` starts on 0-based `line`, and return it.
pub fn assert_diagnostic_at<'a>(
    diagnostics: &'a [Diagnostic],
    code: &str,
    line: usize,
) -> &'a Diagnostic {
    diagnostics
        .iter()
        .find(|d| d.code.as_deref() == Some(code) && d.span.start.line == line)
        .unwrap_or_else(|| {
            panic!(
                "Expected {code} on line {line}, got: {:?}",
                diagnostics
                    .iter()
                    .map(|d| (d.code.clone(), d.span.start.line))
                    .collect::<Vec<_>>()
            )
        })
}

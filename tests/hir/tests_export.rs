//! JSON export of analyzed files.

use codeindex::FileRecord;
use codeindex::hir::ExternalRef;

use crate::helpers::source_fixtures::{self, CLASSES_ANALYSIS};

#[test]
fn test_export_records() {
    let record = CLASSES_ANALYSIS.to_record();
    assert_eq!(record.path, "fixtures/classes.py");
    assert_eq!(record.symbols.len(), CLASSES_ANALYSIS.graph.len());
    assert_eq!(record.edges.len(), CLASSES_ANALYSIS.graph.edges().len());
    assert!(record.diagnostics.is_empty());

    let duck = record
        .symbols
        .iter()
        .find(|s| s.qualified_name == "fixtures.classes.Duck")
        .unwrap();
    assert_eq!(duck.kind, "class");
    assert_eq!(duck.base_refs, vec!["Animal", "Flyer", "Swimmer"]);
    assert_eq!(duck.moniker, "fixtures.classes.Duck");

    let metaclass = record
        .edges
        .iter()
        .find(|e| e.source == duck.id && e.role.as_deref() == Some("metaclass"))
        .unwrap();
    assert_eq!(metaclass.kind, "decorates");
    assert!(metaclass.resolved);
}

#[test]
fn test_export_spans_are_one_based() {
    let record = CLASSES_ANALYSIS.to_record();
    let meta = record
        .symbols
        .iter()
        .find(|s| s.qualified_name == "fixtures.classes.Meta")
        .unwrap();
    assert_eq!(meta.span.start.line, 9);
    assert_eq!(meta.span.start.col, 1);

    let root = &record.symbols[0];
    assert_eq!(root.span.start.line, 1);
    assert_eq!(root.span.start.col, 1);
}

#[test]
fn test_export_diagnostics_and_json() {
    let analysis =
        codeindex::Analyzer::default().analyze("broken.py", source_fixtures::MISSING_DEF);
    let record = analysis.to_record();
    let diagnostic = record
        .diagnostics
        .iter()
        .find(|d| d.code.as_deref() == Some("E0302"))
        .unwrap();
    assert_eq!(diagnostic.severity, "error");
    assert_eq!(diagnostic.span.start.line, 8);
    assert_eq!(diagnostic.span.start.col, 5);

    let json = record.to_json_pretty().unwrap();
    assert!(json.contains("\"diagnostics\""));
    assert_eq!(FileRecord::from_json(&json).unwrap(), record);
}

#[test]
fn test_linked_edges_export_target_path() {
    let mut graph = codeindex::Analyzer::default()
        .analyze("app.py", "import fixtures.classes\n")
        .graph;
    graph.link(&|name: &str| {
        (name == "fixtures.classes")
            .then(|| ExternalRef::new("fixtures/classes.py", "fixtures.classes"))
    });

    let record = FileRecord::new(&graph, &[]);
    let edge = record.edges.iter().find(|e| e.kind == "imports").unwrap();
    assert!(edge.resolved);
    assert_eq!(edge.target, None);
    assert_eq!(edge.target_name.as_deref(), Some("fixtures.classes"));
    assert_eq!(edge.target_path.as_deref(), Some("fixtures/classes.py"));
}

//! Graph invariants that must hold for any input.

use codeindex::Analyzer;
use codeindex::hir::{EdgeKind, EdgeRole, EdgeTarget, Severity, SymbolKind};
use rstest::rstest;

use crate::helpers::diagnostic_helpers::assert_diagnostic_at;
use crate::helpers::source_fixtures;
use crate::helpers::symbol_assertions::{assert_spans_nested, edge_targets, get_symbol};

#[rstest]
#[case("fixtures/classes.py", source_fixtures::CLASSES)]
#[case("fixtures/functions.py", source_fixtures::FUNCTIONS)]
#[case("fixtures/imports.py", source_fixtures::IMPORTS)]
#[case("fixtures/missing_def.py", source_fixtures::MISSING_DEF)]
#[case("fixtures/strings.py", source_fixtures::STRINGS)]
fn test_containment_tree(#[case] path: &str, #[case] source: &str) {
    let graph = Analyzer::default().analyze(path, source).graph;

    let root = graph.root().unwrap();
    assert_eq!(root.kind, SymbolKind::Module);
    assert_eq!(u32::from(root.range.len()) as usize, source.len());

    let mut contained = vec![0usize; graph.len()];
    for edge in graph.edges().iter().filter(|e| e.kind == EdgeKind::Contains) {
        let EdgeTarget::Symbol(child) = edge.target else {
            panic!("Contains edge with unresolved target");
        };
        contained[child.index()] += 1;
    }
    assert_eq!(contained[0], 0, "root has no parent");
    assert!(contained[1..].iter().all(|&count| count == 1));
    assert_spans_nested(&graph);
}

#[rstest]
#[case(source_fixtures::CLASSES)]
#[case(source_fixtures::MISSING_DEF)]
fn test_idempotence(#[case] source: &str) {
    let analyzer = Analyzer::default();
    let first = analyzer.analyze("m.py", source);
    let second = analyzer.analyze("m.py", source);

    assert_eq!(first.graph.monikers(), second.graph.monikers());
    assert_eq!(first.graph.symbols(), second.graph.symbols());
    assert_eq!(first.graph.edges(), second.graph.edges());
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn test_completeness_under_malformation() {
    let analysis = Analyzer::default().analyze("m.py", source_fixtures::MISSING_DEF);
    let graph = &analysis.graph;

    for name in [
        "m.Dictionary",
        "m.Dictionary.__init__",
        "m.Dictionary.get",
        "m.Dictionary.clear",
        "m.main",
    ] {
        get_symbol(graph, name);
    }
    assert!(graph.by_qualified_name("m.Dictionary.update").is_empty());

    let diagnostic = assert_diagnostic_at(&analysis.diagnostics, "E0302", 7);
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.span.start.column, 4);
    assert!(diagnostic.hint.is_some());
}

#[rstest]
#[case("@staticmethod", true, false, 0)]
#[case("@classmethod", false, true, 0)]
#[case("@functools.cache", false, false, 1)]
#[case("@register('x')", false, false, 1)]
fn test_method_decorator_classification(
    #[case] decorator: &str,
    #[case] is_static: bool,
    #[case] is_classmethod: bool,
    #[case] decorates: usize,
) {
    let source = format!("class C:\n    {decorator}\n    def m(self):\n        pass\n");
    let graph = Analyzer::default().analyze("m.py", &source).graph;
    let method = get_symbol(&graph, "m.C.m");

    assert_eq!(method.flags.is_static, is_static);
    assert_eq!(method.flags.is_classmethod, is_classmethod);
    let edges: Vec<_> = graph
        .edges_from(method.id)
        .filter(|e| e.kind == EdgeKind::Decorates)
        .collect();
    assert_eq!(edges.len(), decorates);
    assert!(edges.iter().all(|e| !e.is_resolved()));
}

#[test]
fn test_multiple_inheritance_order() {
    let source = "class A:\n    pass\nclass B:\n    pass\nclass C(A, B, Z):\n    pass\n";
    let graph = Analyzer::default().analyze("m.py", source).graph;
    assert_eq!(
        edge_targets(&graph, "m.C", EdgeKind::Inherits),
        vec!["m.A", "m.B", "Z"]
    );
    let bases: Vec<&str> = get_symbol(&graph, "m.C")
        .bases
        .iter()
        .map(|b| b.as_ref())
        .collect();
    assert_eq!(bases, vec!["A", "B", "Z"]);
}

#[test]
fn test_metaclass_is_not_inheritance() {
    let graph = &source_fixtures::CLASSES_ANALYSIS.graph;
    let duck = get_symbol(graph, "fixtures.classes.Duck");

    assert_eq!(
        edge_targets(graph, "fixtures.classes.Duck", EdgeKind::Inherits),
        vec![
            "fixtures.classes.Animal",
            "fixtures.classes.Flyer",
            "fixtures.classes.Swimmer"
        ]
    );
    let metaclass: Vec<_> = graph
        .edges_from(duck.id)
        .filter(|e| e.role == Some(EdgeRole::Metaclass))
        .collect();
    assert_eq!(metaclass.len(), 1);
    assert_eq!(metaclass[0].kind, EdgeKind::Decorates);
    assert_eq!(
        metaclass[0].target,
        EdgeTarget::Symbol(get_symbol(graph, "fixtures.classes.Meta").id)
    );
}

#[test]
fn test_import_fan_out() {
    let source = "from X import (a, b, c)\n";
    let graph = Analyzer::default().analyze("m.py", source).graph;
    let imports: Vec<_> = graph
        .symbols()
        .iter()
        .filter(|s| s.kind == SymbolKind::Import)
        .collect();

    assert_eq!(imports.len(), 3);
    let names: Vec<&str> = imports.iter().map(|s| s.name.as_ref()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert!(
        imports
            .iter()
            .all(|s| s.import.as_ref().unwrap().module.as_ref() == "X")
    );
}

#[test]
fn test_unresolved_edges_are_exposed() {
    let graph = &source_fixtures::CLASSES_ANALYSIS.graph;
    let names: Vec<&str> = graph
        .unresolved_edges()
        .filter_map(|e| e.target.unresolved_name())
        .collect();
    assert!(names.contains(&"abc.ABC"));
    assert!(names.contains(&"abc.abstractmethod"));
    assert!(names.contains(&"typing.Generic"));
    assert!(!names.contains(&"Animal"));
}

//! Symbol extraction over the fixtures.

use codeindex::hir::{EdgeKind, SymbolKind};
use codeindex::{Analyzer, ExtractorConfig};

use crate::helpers::diagnostic_helpers::assert_no_errors;
use crate::helpers::source_fixtures::{self, CLASSES_ANALYSIS, FUNCTIONS_ANALYSIS};
use crate::helpers::symbol_assertions::{
    assert_symbol_kind, child_names, edge_targets, get_symbol,
};

#[test]
fn test_classes_fixture_structure() {
    let graph = &CLASSES_ANALYSIS.graph;
    assert_no_errors(&CLASSES_ANALYSIS.diagnostics);

    assert_eq!(graph.module_name(), "fixtures.classes");
    assert_eq!(
        graph.root().unwrap().docstring.as_deref(),
        Some("Classes, inheritance and metaclasses.")
    );
    assert_eq!(
        child_names(graph, "fixtures.classes"),
        vec![
            "abc", "Generic", "TypeVar", "T", "Meta", "Animal", "Flyer", "Swimmer", "Duck", "Box"
        ]
    );
    assert_eq!(child_names(graph, "fixtures.classes.Duck"), vec!["Feathers", "speak"]);
    assert_symbol_kind(graph, "fixtures.classes.Duck.Feathers", SymbolKind::Class);
    assert_symbol_kind(graph, "fixtures.classes.Duck.Feathers.color", SymbolKind::Variable);
    assert_symbol_kind(graph, "fixtures.classes.Meta.__new__", SymbolKind::Method);
}

#[test]
fn test_magic_methods_and_constructor() {
    let graph = &CLASSES_ANALYSIS.graph;
    let init = get_symbol(graph, "fixtures.classes.Animal.__init__");
    assert!(init.flags.is_constructor);
    let repr = get_symbol(graph, "fixtures.classes.Animal.__repr__");
    assert!(!repr.flags.is_constructor);
    assert_eq!(repr.parameters.len(), 1);
}

#[test]
fn test_abstract_and_property_flags() {
    let graph = &CLASSES_ANALYSIS.graph;
    assert!(get_symbol(graph, "fixtures.classes.Animal").flags.is_abstract);
    assert!(get_symbol(graph, "fixtures.classes.Animal.speak").flags.is_abstract);
    assert!(!get_symbol(graph, "fixtures.classes.Flyer").flags.is_abstract);

    let speak = get_symbol(graph, "fixtures.classes.Duck.speak");
    assert!(speak.flags.is_property);
    assert_eq!(
        edge_targets(graph, "fixtures.classes.Duck.speak", EdgeKind::Decorates),
        vec!["property"]
    );
}

#[test]
fn test_static_and_class_methods() {
    let graph = &CLASSES_ANALYSIS.graph;
    let altitude = get_symbol(graph, "fixtures.classes.Flyer.altitude");
    assert!(altitude.flags.is_static && !altitude.flags.is_classmethod);
    let create = get_symbol(graph, "fixtures.classes.Flyer.create");
    assert!(create.flags.is_classmethod && !create.flags.is_static);
    assert!(
        edge_targets(graph, "fixtures.classes.Flyer.create", EdgeKind::Decorates).is_empty()
    );
}

#[test]
fn test_generic_base_and_annotations() {
    let graph = &CLASSES_ANALYSIS.graph;
    assert_eq!(
        edge_targets(graph, "fixtures.classes.Box", EdgeKind::Inherits),
        vec!["Generic[T]"]
    );
    let get = get_symbol(graph, "fixtures.classes.Box.get");
    assert_eq!(get.signature.as_deref(), Some("def get(self) -> T"));

    let sound = get_symbol(graph, "fixtures.classes.Animal.sound");
    assert_eq!(sound.annotation.as_deref(), Some("str"));
}

#[test]
fn test_functions_fixture_flags() {
    let graph = &FUNCTIONS_ANALYSIS.graph;
    assert_no_errors(&FUNCTIONS_ANALYSIS.diagnostics);

    let plain = get_symbol(graph, "fixtures.functions.plain");
    let params: Vec<&str> = plain.parameters.iter().map(|p| p.as_ref()).collect();
    assert_eq!(params, vec!["a", "b", "*args", "key", "**kwargs"]);
    assert!(!plain.flags.is_generator);

    let fetch = get_symbol(graph, "fixtures.functions.fetch");
    assert!(fetch.flags.is_async && !fetch.flags.is_generator);
    let stream = get_symbol(graph, "fixtures.functions.stream");
    assert!(stream.flags.is_async && stream.flags.is_generator);

    assert!(get_symbol(graph, "fixtures.functions.counter").flags.is_generator);
    assert!(!get_symbol(graph, "fixtures.functions.outer").flags.is_generator);
    assert!(get_symbol(graph, "fixtures.functions.outer.inner").flags.is_generator);

    let managed = get_symbol(graph, "fixtures.functions.managed");
    assert!(managed.flags.is_generator);
    assert_eq!(
        edge_targets(graph, "fixtures.functions.managed", EdgeKind::Decorates),
        vec!["contextlib.contextmanager"]
    );
}

#[test]
fn test_function_locals_follow_config() {
    let graph = &FUNCTIONS_ANALYSIS.graph;
    assert!(graph.by_qualified_name("fixtures.functions.counter.n").is_empty());

    let analyzer = Analyzer::new(ExtractorConfig::default().record_local_variables(true));
    let analysis = analyzer.analyze("fixtures/functions.py", source_fixtures::FUNCTIONS);
    // `n += 1` is not a binding assignment
    assert_eq!(
        analysis
            .graph
            .by_qualified_name("fixtures.functions.counter.n")
            .len(),
        1
    );
}

#[test]
fn test_imports_fixture() {
    let analysis = Analyzer::default().analyze("fixtures/imports.py", source_fixtures::IMPORTS);
    let graph = &analysis.graph;
    assert_no_errors(&analysis.diagnostics);

    let imports: Vec<(String, String)> = graph
        .symbols()
        .iter()
        .filter(|s| s.kind == SymbolKind::Import)
        .map(|s| {
            let target = graph
                .edges_from(s.id)
                .find(|e| e.kind == EdgeKind::Imports)
                .and_then(|e| e.target.unresolved_name().map(str::to_string))
                .unwrap();
            (s.name.to_string(), target)
        })
        .collect();

    let expected = [
        ("os", "os"),
        ("osp", "os.path"),
        ("OrderedDict", "collections.OrderedDict"),
        ("defaultdict", "collections.defaultdict"),
        ("namedtuple", "collections.namedtuple"),
        ("sibling", ".sibling"),
        ("alias", "..pkg.mod.thing"),
        ("*", "typing"),
    ];
    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();
    assert_eq!(imports, expected);
}

#[test]
fn test_strings_fixture_variables() {
    let analysis = Analyzer::default().analyze("fixtures/strings.py", source_fixtures::STRINGS);
    assert_no_errors(&analysis.diagnostics);
    let names: Vec<&str> = analysis
        .graph
        .symbols()
        .iter()
        .skip(1)
        .map(|s| s.name.as_ref())
        .collect();
    assert_eq!(
        names,
        vec!["my_dict", "label", "nested", "raw", "data", "quote", "doc"]
    );
}

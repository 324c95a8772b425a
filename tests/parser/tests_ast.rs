//! Typed AST accessors over the fixtures.

use codeindex::parser::{AstNode, ClassDef, FunctionDef, ImportFromStmt, SourceFile, parse};

use crate::helpers::source_fixtures;

fn source_file(input: &str) -> SourceFile {
    parse(input).source_file().unwrap()
}

fn functions(file: &SourceFile) -> Vec<FunctionDef> {
    file.syntax().descendants().filter_map(FunctionDef::cast).collect()
}

fn class_named(file: &SourceFile, name: &str) -> ClassDef {
    file.syntax()
        .descendants()
        .filter_map(ClassDef::cast)
        .find(|c| c.name().and_then(|n| n.text()).as_deref() == Some(name))
        .unwrap_or_else(|| panic!("no class {name}"))
}

#[test]
fn test_function_names_in_order() {
    let file = source_file(source_fixtures::FUNCTIONS);
    let names: Vec<String> = functions(&file)
        .iter()
        .filter_map(|f| f.name()?.text())
        .map(|n| n.to_string())
        .collect();
    assert_eq!(
        names,
        vec!["plain", "counter", "outer", "inner", "fetch", "stream", "managed"]
    );
}

#[test]
fn test_generator_detection_respects_nested_scopes() {
    let file = source_file(source_fixtures::FUNCTIONS);
    let generators: Vec<String> = functions(&file)
        .iter()
        .filter(|f| f.is_generator())
        .filter_map(|f| f.name()?.text())
        .map(|n| n.to_string())
        .collect();
    assert_eq!(generators, vec!["counter", "inner", "stream", "managed"]);
}

#[test]
fn test_class_header_accessors() {
    let file = source_file(source_fixtures::CLASSES);
    let duck = class_named(&file, "Duck");

    let bases: Vec<String> = duck
        .bases()
        .iter()
        .map(|b| b.dotted_path().unwrap())
        .collect();
    assert_eq!(bases, vec!["Animal", "Flyer", "Swimmer"]);
    assert_eq!(
        duck.metaclass().and_then(|m| m.dotted_path()).as_deref(),
        Some("Meta")
    );
    assert_eq!(
        duck.signature(),
        "class Duck(Animal, Flyer, Swimmer, metaclass=Meta)"
    );

    let animal = class_named(&file, "Animal");
    assert_eq!(animal.body().unwrap().docstring().as_deref(), Some("Base animal."));
}

#[test]
fn test_parenthesized_import_list() {
    let file = source_file(source_fixtures::IMPORTS);
    let import = file
        .syntax()
        .descendants()
        .filter_map(ImportFromStmt::cast)
        .find(|i| i.module_path() == "collections")
        .unwrap();
    let names: Vec<String> = import
        .aliases()
        .filter_map(|a| a.name()?.text())
        .map(|n| n.to_string())
        .collect();
    assert_eq!(names, vec!["OrderedDict", "defaultdict", "namedtuple"]);
    assert_eq!(import.level(), 0);
}

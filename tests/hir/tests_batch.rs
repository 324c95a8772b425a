//! Batch analysis of a source tree on disk.
//!
//! Reading files is the caller's job; these tests play the caller with
//! `walkdir` over a temporary directory.

use std::fs;
use std::path::Path;

use codeindex::hir::{SymbolGraph, codes};
use codeindex::{AnalysisError, Analyzer, SourceInput};
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::helpers::{on_small_stack, source_fixtures};

fn write_tree(root: &Path) {
    for (path, source) in source_fixtures::ALL {
        let full = root.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, source).unwrap();
    }
    fs::write(root.join("fixtures/__init__.py"), "").unwrap();
    fs::write(root.join("fixtures/notes.txt"), "not python").unwrap();
    fs::write(root.join("fixtures/latin1.py"), b"name = '\xe9'\n").unwrap();
}

fn collect_inputs(root: &Path) -> Vec<SourceInput> {
    let mut inputs: Vec<SourceInput> = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry.path().strip_prefix(root).unwrap();
            let path = relative.to_string_lossy().replace('\\', "/");
            SourceInput::new(path, fs::read(entry.path()).unwrap())
        })
        .collect();
    inputs.sort_by(|a, b| a.path.cmp(&b.path));
    inputs
}

#[test]
fn test_batch_over_directory() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path());
    let inputs = collect_inputs(dir.path());
    assert_eq!(inputs.len(), 8);

    let results = Analyzer::default().analyze_batch(&inputs);
    assert_eq!(results.len(), inputs.len());

    for (input, result) in inputs.iter().zip(&results) {
        match input.path.as_str() {
            "fixtures/notes.txt" => assert!(matches!(
                result,
                Err(AnalysisError::UnsupportedExtension { .. })
            )),
            "fixtures/latin1.py" => {
                let Err(error) = result else {
                    panic!("latin-1 input must not decode");
                };
                let diagnostics = error.diagnostics();
                assert_eq!(diagnostics.len(), 1);
                assert_eq!(diagnostics[0].code.as_deref(), Some(codes::INVALID_ENCODING));
            }
            path => {
                let analysis = result.as_ref().unwrap();
                assert_eq!(analysis.graph.path(), path);
            }
        }
    }

    let package = results
        .iter()
        .zip(&inputs)
        .find(|(_, input)| input.path == "fixtures/__init__.py")
        .and_then(|(result, _)| result.as_ref().ok())
        .unwrap();
    assert_eq!(package.graph.module_name(), "fixtures");
}

#[test]
fn test_merged_namespace_graph() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path());
    let inputs = collect_inputs(dir.path());

    let graphs: Vec<SymbolGraph> = Analyzer::default()
        .analyze_batch(&inputs)
        .into_iter()
        .filter_map(Result::ok)
        .map(|analysis| analysis.graph)
        .collect();
    let files = graphs.len();
    let symbols: usize = graphs.iter().map(SymbolGraph::len).sum();

    let merged = SymbolGraph::merge("fixtures", graphs);
    assert_eq!(merged.len(), symbols + 1);
    let root = merged.root().unwrap();
    assert_eq!(merged.children(root.id).len(), files);
    // The package's own __init__ module shares the root's name
    assert_eq!(merged.by_qualified_name("fixtures").len(), 2);
    assert_eq!(merged.monikers()[1..].iter().filter(|m| *m == "fixtures#1").count(), 1);
}

#[test]
fn test_cross_file_linking() {
    let analyzer = Analyzer::default();
    let library = analyzer
        .analyze("fixtures/classes.py", source_fixtures::CLASSES)
        .graph;
    let mut app = analyzer
        .analyze(
            "app.py",
            "from fixtures.classes import Duck\n\nclass RubberDuck(Duck):\n    pass\n",
        )
        .graph;

    assert_eq!(app.unresolved_edges().count(), 2);
    assert_eq!(app.link(&library), 1);
    let remaining: Vec<&str> = app
        .unresolved_edges()
        .filter_map(|e| e.target.unresolved_name())
        .collect();
    // The base names the local import, not a qualified name
    assert_eq!(remaining, vec!["Duck"]);
}

#[test]
fn test_batch_survives_deep_nesting() {
    let inputs = vec![
        SourceInput::new("ok.py", "def f():\n    pass\n"),
        SourceInput::new("brackets.py", format!("x = {}\n", "[".repeat(20_000))),
        SourceInput::new("blocks.py", source_fixtures::nested_blocks(3_000)),
    ];

    let results = Analyzer::default().analyze_batch(&inputs);
    let summary: Vec<(String, Vec<String>, bool)> = results
        .into_iter()
        .map(|result| {
            let analysis = result.unwrap();
            let codes = analysis
                .diagnostics
                .iter()
                .filter_map(|d| d.code.as_deref().map(str::to_string))
                .collect();
            let has_after = !analysis.graph.by_qualified_name("blocks.after").is_empty();
            (analysis.graph.path().to_string(), codes, has_after)
        })
        .collect();

    assert_eq!(summary[0], ("ok.py".to_string(), vec![], false));
    assert_eq!(summary[1].0, "brackets.py");
    assert!(summary[1].1.iter().any(|code| code == "E0408"));
    assert_eq!(summary[2].0, "blocks.py");
    assert!(summary[2].1.iter().any(|code| code == "E0210"));
    assert!(summary[2].2);
}

#[test]
fn test_deep_file_analyzed_on_small_stack() {
    let (errors, symbols) = on_small_stack(|| {
        let source = format!("{}\nclass Kept:\n    pass\n", "(".repeat(5_000));
        let analysis = Analyzer::default().analyze("deep.py", &source);
        (analysis.has_errors(), analysis.graph.by_qualified_name("deep.Kept").len())
    });
    assert!(errors);
    assert_eq!(symbols, 1);
}

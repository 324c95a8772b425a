use super::*;
use crate::parser::parse;

fn source_file(input: &str) -> SourceFile {
    let parsed = parse(input);
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);
    SourceFile::cast(parsed.syntax()).unwrap()
}

fn first_statement(input: &str) -> Statement {
    source_file(input).statements().next().unwrap()
}

#[test]
fn test_ast_function_def() {
    let stmt = first_statement("async def fetch(url, *, retries: int = 3, **kw) -> bytes:\n    pass\n");

    if let Statement::FunctionDef(func) = stmt {
        assert!(func.is_async());
        assert_eq!(func.name().unwrap().text().as_deref(), Some("fetch"));
        let params: Vec<_> = func.param_list().unwrap().params().collect();
        assert_eq!(params.len(), 4);
        assert_eq!(params[1].kind(), ParamKind::KeywordOnlyMarker);
        assert_eq!(params[2].annotation().unwrap().text(), "int");
        assert!(params[2].default().is_some());
        assert_eq!(params[3].display_name().as_deref(), Some("**kw"));
        assert_eq!(
            func.signature(),
            "async def fetch(url, *, retries: int = 3, **kw) -> bytes"
        );
    } else {
        panic!("expected FunctionDef");
    }
}

#[test]
fn test_ast_signature_spans_lines() {
    let stmt = first_statement("def f(\n    a,\n    b,  # second\n):\n    pass\n");

    let Statement::FunctionDef(func) = stmt else {
        panic!("expected FunctionDef");
    };
    assert_eq!(func.signature(), "def f(a, b,)");
}

#[test]
fn test_ast_decorators() {
    let stmt = first_statement("@app.route('/x', methods=['GET'])\n@staticmethod\ndef f():\n    pass\n");

    if let Statement::FunctionDef(func) = stmt {
        let decorators: Vec<_> = func.decorators().collect();
        assert_eq!(decorators.len(), 2);
        assert_eq!(decorators[0].path().as_deref(), Some("app.route"));
        assert_eq!(decorators[0].text(), "app.route('/x', methods=['GET'])");
        assert_eq!(decorators[1].reference(), "staticmethod");
    } else {
        panic!("expected FunctionDef");
    }
}

#[test]
fn test_ast_generator_ignores_nested_scopes() {
    let file = source_file(
        "def outer():\n    def inner():\n        yield 1\n    return inner\n\ndef gen():\n    if x:\n        y = yield\n",
    );
    let funcs: Vec<FunctionDef> = file
        .statements()
        .filter_map(|s| match s {
            Statement::FunctionDef(f) => Some(f),
            _ => None,
        })
        .collect();
    assert!(!funcs[0].is_generator());
    assert!(funcs[1].is_generator());
}

#[test]
fn test_ast_class_bases_and_metaclass() {
    let stmt = first_statement("class C(A, mod.B, Z, metaclass=Meta):\n    pass\n");

    if let Statement::ClassDef(class) = stmt {
        let bases: Vec<_> = class
            .bases()
            .iter()
            .map(|b| b.dotted_path().unwrap())
            .collect();
        assert_eq!(bases, vec!["A", "mod.B", "Z"]);
        assert_eq!(class.metaclass().unwrap().dotted_path().as_deref(), Some("Meta"));
    } else {
        panic!("expected ClassDef");
    }
}

#[test]
fn test_ast_docstrings() {
    let file = source_file("\"\"\"Module doc.\"\"\"\n\nclass A:\n    '''  Class doc. '''\n    x = 1\n");
    assert_eq!(file.docstring().as_deref(), Some("Module doc."));

    let Some(Statement::ClassDef(class)) = file.statements().nth(1) else {
        panic!("expected ClassDef");
    };
    let body = class.body().unwrap();
    assert_eq!(body.docstring().as_deref(), Some("Class doc."));
    assert!(body.docstring_stmt().is_some());
}

#[test]
fn test_ast_fstring_is_not_docstring() {
    let file = source_file("def f():\n    f'not {doc}'\n");
    let Some(Statement::FunctionDef(func)) = file.statements().next() else {
        panic!("expected FunctionDef");
    };
    assert_eq!(func.body().unwrap().docstring(), None);
}

#[test]
fn test_ast_import() {
    let stmt = first_statement("import os.path as osp, sys\n");

    if let Statement::Import(import) = stmt {
        let aliases: Vec<_> = import.aliases().collect();
        assert_eq!(aliases.len(), 2);
        assert_eq!(aliases[0].path().as_deref(), Some("os.path"));
        assert_eq!(aliases[0].alias().unwrap().text().as_deref(), Some("osp"));
        assert!(aliases[1].alias().is_none());
    } else {
        panic!("expected Import");
    }
}

#[test]
fn test_ast_import_from() {
    let stmt = first_statement("from ..pkg.mod import (a, b as c,)\n");

    if let Statement::ImportFrom(import) = stmt {
        assert_eq!(import.level(), 2);
        assert_eq!(import.module_path(), "..pkg.mod");
        assert!(!import.is_wildcard());
        let names: Vec<_> = import.aliases().filter_map(|a| a.path()).collect();
        assert_eq!(names, vec!["a", "b"]);
    } else {
        panic!("expected ImportFrom");
    }
}

#[test]
fn test_ast_import_wildcard() {
    let stmt = first_statement("from . import *\n");

    let Statement::ImportFrom(import) = stmt else {
        panic!("expected ImportFrom");
    };
    assert!(import.is_wildcard());
    assert_eq!(import.module_path(), ".");
}

#[test]
fn test_ast_assignment_targets() {
    let stmt = first_statement("a = b, c = 1, 2\n");

    let Statement::Assignment(assign) = stmt else {
        panic!("expected Assignment");
    };
    let targets = assign.targets();
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].as_name().as_deref(), Some("a"));
    assert_eq!(targets[1].kind(), SyntaxKind::TUPLE_EXPR);
    assert_eq!(assign.value().unwrap().kind(), SyntaxKind::TUPLE_EXPR);
}

#[test]
fn test_ast_annotated_assignment() {
    let stmt = first_statement("count: dict[str, int]\n");

    let Statement::Assignment(assign) = stmt else {
        panic!("expected Assignment");
    };
    assert_eq!(assign.targets().len(), 1);
    assert_eq!(assign.annotation().unwrap().text(), "dict[str, int]");
    assert!(assign.value().is_none());
}

#[test]
fn test_ast_compound_blocks() {
    let stmt = first_statement(
        "try:\n    a = 1\nexcept E as e:\n    b = 2\nelse:\n    c = 3\nfinally:\n    d = 4\n",
    );

    let Statement::Compound(compound) = stmt else {
        panic!("expected compound statement");
    };
    assert_eq!(compound.kind(), SyntaxKind::TRY_STMT);
    assert_eq!(compound.blocks().len(), 4);
}

#[test]
fn test_ast_preceding_comments() {
    let file = source_file("# unrelated\n\n# Helper.\n# Second line.\ndef f():\n    pass\n");
    let Some(Statement::FunctionDef(func)) = file.statements().next() else {
        panic!("expected FunctionDef");
    };
    assert_eq!(
        func.preceding_comments().as_deref(),
        Some("Helper.\nSecond line.")
    );
}

#[test]
fn test_ast_significant_range_excludes_layout() {
    let input = "def f():\n    pass\n\nx = 1\n";
    let file = source_file(input);
    let Some(Statement::FunctionDef(func)) = file.statements().next() else {
        panic!("expected FunctionDef");
    };
    let range = func.significant_range();
    assert_eq!(&input[range], "def f():\n    pass");
}

#[test]
fn test_ast_missing_def_keeps_body() {
    let parsed = parse("foo(x):\n    def inner():\n        pass\n");
    assert!(!parsed.ok());
    let file = SourceFile::cast(parsed.syntax()).unwrap();

    let Some(Statement::Error(error)) = file.statements().next() else {
        panic!("expected ERROR statement");
    };
    let block = error.blocks().next().unwrap();
    assert!(matches!(
        block.statements().next(),
        Some(Statement::FunctionDef(_))
    ));
}

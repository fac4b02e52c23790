//! Single-line resolution against fixture sources

use crate::common::resource;
use symbolpath::{Settings, SymbolPathError, get_path};

fn path_at(file: &str, line: u32) -> String {
    get_path(&Settings::default(), &resource(file), line)
        .unwrap()
        .path
}

#[test]
fn test_class_and_constructor_lines() {
    assert_eq!(path_at("lib-sample.js", 1), "DirectoryListHandler");
    for line in 2..=7 {
        assert_eq!(
            path_at("lib-sample.js", line),
            "DirectoryListHandler.constructor",
            "line {line}"
        );
    }
}

#[test]
fn test_comments_between_members_belong_to_the_class() {
    for line in 8..=12 {
        assert_eq!(path_at("lib-sample.js", line), "DirectoryListHandler", "line {line}");
    }
    assert_eq!(path_at("lib-sample.js", 49), "DirectoryListHandler");
}

#[test]
fn test_nested_function_declaration_is_innermost() {
    for line in 15..=18 {
        assert_eq!(
            path_at("lib-sample.js", line),
            "DirectoryListHandler.addDirectory.findCallback",
            "line {line}"
        );
    }
    assert_eq!(path_at("lib-sample.js", 14), "DirectoryListHandler.addDirectory");
    assert_eq!(path_at("lib-sample.js", 19), "DirectoryListHandler.addDirectory");
}

#[test]
fn test_function_expressions_do_not_label() {
    for line in 35..=38 {
        assert_eq!(
            path_at("lib-sample.js", line),
            "DirectoryListHandler.removeDirectory",
            "line {line}"
        );
    }
    assert_eq!(path_at("lib-sample.js", 46), "DirectoryListHandler.reset");
}

#[test]
fn test_top_level_function_and_gaps() {
    assert_eq!(path_at("lib-sample.js", 50), "");
    for line in 51..=53 {
        assert_eq!(path_at("lib-sample.js", line), "instantiate", "line {line}");
    }
    assert_eq!(path_at("lib-sample.js", 54), "");
    assert_eq!(path_at("lib-sample.js", 0), "");
}

#[test]
fn test_object_literal_namespace() {
    assert_eq!(
        path_at("lib-with-namespace-sample.js", 6),
        "FileSystem.Directory.DirectoryListHandler.constructor"
    );
    assert_eq!(
        path_at("lib-with-namespace-sample.js", 8),
        "FileSystem.Directory.DirectoryListHandler.addDirectory"
    );
    assert_eq!(
        path_at("lib-with-namespace-sample.js", 11),
        "FileSystem.Directory.DirectoryListHandler.removeDirectory"
    );
    // Class and function expressions enclose these lines but cannot label them
    assert_eq!(path_at("lib-with-namespace-sample.js", 3), "");
    assert_eq!(path_at("lib-with-namespace-sample.js", 19), "");
}

#[test]
fn test_file_without_declarations() {
    assert_eq!(path_at("lib-empty-sample.js", 2), "");
    assert_eq!(path_at("lib-empty-sample.js", 3), "");
}

#[test]
fn test_typescript_namespace_and_members() {
    assert_eq!(path_at("shapes.ts", 1), "");
    assert_eq!(path_at("shapes.ts", 2), "Geometry.Shape");
    assert_eq!(path_at("shapes.ts", 3), "Geometry.Shape.constructor");
    assert_eq!(path_at("shapes.ts", 4), "Geometry.Shape");
    assert_eq!(path_at("shapes.ts", 5), "Geometry.Shape.area");
    assert_eq!(path_at("shapes.ts", 12), "Geometry.Shape.describe");
    assert_eq!(path_at("shapes.ts", 19), "Geometry.Circle.constructor");
    assert_eq!(path_at("shapes.ts", 23), "Geometry.Circle.area");
    assert_eq!(path_at("shapes.ts", 27), "");
}

#[test]
fn test_accessors_fall_back_to_the_class() {
    assert_eq!(path_at("shapes.ts", 8), "Geometry.Shape");
}

#[test]
fn test_overload_signatures_label_their_line() {
    assert_eq!(path_at("shapes.ts", 28), "largest");
    assert_eq!(path_at("shapes.ts", 31), "largest");
}

#[test]
fn test_result_echoes_query() {
    let file = resource("lib-sample.js");
    let result = get_path(&Settings::default(), &file, 52).unwrap();

    assert_eq!(result.file, file.display().to_string());
    assert_eq!(result.line, 52);
    assert_eq!(result.path, "instantiate");
}

#[test]
fn test_missing_source_is_a_read_error() {
    let error = get_path(&Settings::default(), &resource("does-not-exist.js"), 1).unwrap_err();
    assert!(matches!(error, SymbolPathError::FileRead { .. }));
    assert_eq!(error.status_code(), "FILE_READ_ERROR");
}

#[test]
fn test_decorators_belong_to_their_declaration() {
    for line in 1..=5 {
        assert_eq!(path_at("decorated.ts", line), "AppComponent", "line {line}");
    }
    for line in 8..=11 {
        assert_eq!(path_at("decorated.ts", line), "AppComponent.onResize", "line {line}");
    }
    // Accessors cannot label, so their decorators fall back to the class
    assert_eq!(path_at("decorated.ts", 13), "AppComponent");
    assert_eq!(path_at("decorated.ts", 18), "");
    assert_eq!(path_at("decorated.ts", 19), "Service");
    for line in 21..=25 {
        assert_eq!(path_at("decorated.ts", line), "Service.load", "line {line}");
    }
}

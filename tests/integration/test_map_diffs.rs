//! Diff annotation against fixture sources

use crate::common::{TestProject, resource};
use symbolpath::{DiffError, LineEnding, Settings, SymbolPathError, map_diffs_to_paths};

fn symbols(settings: &Settings, source: &str, diff: &std::path::Path) -> Vec<(u32, Option<String>)> {
    map_diffs_to_paths(settings, &resource(source), diff)
        .unwrap()
        .records()
        .map(|record| (record.line, record.symbol.clone()))
        .collect()
}

fn expected_lib_sample() -> Vec<(u32, Option<String>)> {
    vec![
        (2, Some("DirectoryListHandler.constructor".to_string())),
        (5, Some("DirectoryListHandler.constructor".to_string())),
        (17, Some("DirectoryListHandler.addDirectory.findCallback".to_string())),
        (37, Some("DirectoryListHandler.removeDirectory".to_string())),
        (50, None),
        (52, Some("instantiate".to_string())),
        (8, Some("DirectoryListHandler".to_string())),
    ]
}

#[test]
fn test_lib_sample_diff() {
    let result = symbols(
        &Settings::default(),
        "lib-sample.js",
        &resource("lib-sample.diff"),
    );
    assert_eq!(result, expected_lib_sample());
}

#[test]
fn test_records_keep_status_and_content() {
    let diffs = map_diffs_to_paths(
        &Settings::default(),
        &resource("lib-sample.js"),
        &resource("lib-sample.diff"),
    )
    .unwrap();

    let record = diffs.get(17).unwrap();
    assert_eq!(record.status.as_str(), "M");
    assert_eq!(record.content, "\t\t\treturn d === directory;");

    let json = serde_json::to_value(&diffs).unwrap();
    assert_eq!(json[4]["symbol"], serde_json::Value::Null);
    assert_eq!(json[6]["status"], "A");
}

#[test]
fn test_crlf_diff_file() {
    let project = TestProject::new();
    let text = std::fs::read_to_string(resource("lib-sample.diff")).unwrap();
    let diff = project.add_file("changes.diff", &text.replace('\n', "\r\n"));

    let auto = symbols(&Settings::default(), "lib-sample.js", &diff);
    assert_eq!(auto, expected_lib_sample());

    let mut settings = Settings::default();
    settings.diff.line_ending = LineEnding::Crlf;
    assert_eq!(symbols(&settings, "lib-sample.js", &diff), expected_lib_sample());
}

#[test]
fn test_namespace_sample_diff() {
    let project = TestProject::new();
    let diff = project.add_file(
        "changes.diff",
        "5|M|this.directories = directories;\n19|M|return new DirectoryListHandler(directories);\n1|A|export const FileSystem = {\n",
    );

    let result = symbols(&Settings::default(), "lib-with-namespace-sample.js", &diff);
    assert_eq!(
        result,
        vec![
            (
                5,
                Some("FileSystem.Directory.DirectoryListHandler.constructor".to_string())
            ),
            (19, None),
            (1, None),
        ]
    );
}

#[test]
fn test_typescript_diff() {
    let project = TestProject::new();
    let diff = project.add_file(
        "changes.diff",
        "31|M|(best, shape) => best\n8|M|return label;\n3|D|constructor() {}\n",
    );

    let result = symbols(&Settings::default(), "shapes.ts", &diff);
    assert_eq!(
        result,
        vec![
            (31, Some("largest".to_string())),
            (8, Some("Geometry.Shape".to_string())),
            (3, Some("Geometry.Shape.constructor".to_string())),
        ]
    );
}

#[test]
fn test_diff_lines_past_end_of_file() {
    let project = TestProject::new();
    let diff = project.add_file("changes.diff", "400|A|appended\n52|M|x\n");

    let result = symbols(&Settings::default(), "lib-sample.js", &diff);
    assert_eq!(
        result,
        vec![(400, None), (52, Some("instantiate".to_string()))]
    );
}

#[test]
fn test_mapping_twice_gives_identical_output() {
    let run = || {
        serde_json::to_string(
            &map_diffs_to_paths(
                &Settings::default(),
                &resource("lib-sample.js"),
                &resource("lib-sample.diff"),
            )
            .unwrap(),
        )
        .unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_invalid_diff_lines() {
    let project = TestProject::new();
    let source = resource("lib-sample.js");

    let cases = [
        ("0|M|x\n", "line number should be greater than 0"),
        ("5|Q|x\n", "status should be A, D, or M"),
        ("five|M|x\n", "line number should be an integer"),
        ("5|M|\n", "diff should not be empty"),
        ("1|A|ok\n\n2|A|ok\n", "unexpected empty line at line 2"),
    ];

    for (index, (text, message)) in cases.iter().enumerate() {
        let diff = project.add_file(&format!("case{index}.diff"), text);
        let error = map_diffs_to_paths(&Settings::default(), &source, &diff).unwrap_err();

        assert!(
            matches!(error, SymbolPathError::InvalidDiff { .. }),
            "case {index}: {error}"
        );
        assert!(error.to_string().contains(message), "case {index}: {error}");
    }
}

#[test]
fn test_invalid_line_reports_every_problem() {
    let project = TestProject::new();
    let diff = project.add_file("changes.diff", "3|A|fine\n0|Q|x\n");

    let error = map_diffs_to_paths(&Settings::default(), &resource("lib-sample.js"), &diff)
        .unwrap_err();
    let SymbolPathError::InvalidDiff { source, .. } = error else {
        panic!("expected an invalid diff error");
    };

    assert_eq!(source.index(), 2);
    assert!(matches!(source, DiffError::InvalidLine { ref raw, .. } if raw == "0|Q|x"));
    assert_eq!(source.problems().len(), 2);
}

#[test]
fn test_empty_diff_file() {
    let project = TestProject::new();
    let diff = project.add_file("changes.diff", "");

    let diffs =
        map_diffs_to_paths(&Settings::default(), &resource("lib-sample.js"), &diff).unwrap();
    assert!(diffs.is_empty());
    assert_eq!(serde_json::to_string(&diffs).unwrap(), "[]");
}

//! End-to-end tests: JSON document → text grid → segments.

use gridcast::{
    render_text, segment_artifact, RenderError, SegmentKind, StyleRegistry, TableDocument,
};

fn registry() -> StyleRegistry {
    StyleRegistry::with_builtins()
}

fn render_document(json: &str) -> Result<String, RenderError> {
    let document = TableDocument::from_json(json).unwrap();
    render_text(&document.to_table_spec(), &registry())
}

#[test]
fn golden_scenario_from_json() {
    let output = render_document(
        r#"{"type": "single-line-full", "headers": ["A", "BB"], "rows": [["x", "yy"]]}"#,
    )
    .unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], "│ A │ BB │");
    assert_eq!(lines[3], "│ x │ yy │");
}

#[test]
fn zero_rows_produce_empty_artifact() {
    let output =
        render_document(r#"{"type": "single-line-full", "headers": ["A", "B"], "rows": []}"#)
            .unwrap();
    assert_eq!(output.len(), 0);
}

#[test]
fn unknown_style_lists_builtins() {
    let err = render_document(
        r#"{"type": "no-such-style", "headers": ["A"], "rows": [["x"]]}"#,
    )
    .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("no-such-style"));
    assert!(msg.contains("single-line-full"));
    assert!(msg.contains("double-line-full"));
}

#[test]
fn re_rendering_is_byte_identical() {
    let json = r#"{
        "type": "double-line-full",
        "headers": ["Region", "Total"],
        "rows": [["EMEA", "1204"], ["**APAC**", "2117"]],
        "alignment": ["left", "right"]
    }"#;
    assert_eq!(render_document(json).unwrap(), render_document(json).unwrap());
}

#[test]
fn multi_row_grid_interleaves_separators() {
    let output = render_document(
        r#"{"type": "single-line-full", "headers": ["H"], "rows": [["a"], ["b"], ["c"]]}"#,
    )
    .unwrap();

    let lines: Vec<&str> = output.lines().collect();
    // top, header, sep, a, sep, b, sep, c, bottom
    assert_eq!(lines.len(), 9);
    assert!(lines[0].starts_with('┌'));
    assert!(lines[2].starts_with('├'));
    assert!(lines[4].starts_with('├'));
    assert!(lines[6].starts_with('├'));
    assert!(lines[8].starts_with('└'));
}

#[test]
fn emphasis_is_stripped_from_text_but_tagged_for_images() {
    use gridcast::GridRenderer;

    let json = r#"{"type": "single-line-full", "headers": ["**Bold**"], "rows": [["plain"]]}"#;
    let output = render_document(json).unwrap();
    assert!(!output.contains("**"));

    let document = TableDocument::from_json(json).unwrap();
    let spec = document.to_table_spec();
    let reg = registry();
    let style = reg.lookup(&spec.style).unwrap();
    let lines = GridRenderer::new(style).render_classified(&spec, &reg.structural_glyphs());

    let header_kinds: Vec<SegmentKind> = lines[1].iter().map(|s| s.kind).collect();
    assert!(header_kinds.contains(&SegmentKind::Emphasized));
    let data_kinds: Vec<SegmentKind> = lines[3].iter().map(|s| s.kind).collect();
    assert!(!data_kinds.contains(&SegmentKind::Emphasized));
}

#[test]
fn segmented_lines_reconstruct_the_artifact() {
    let output = render_document(
        r#"{"type": "heavy-line-full", "headers": ["A", "B"], "rows": [["1", "2"]]}"#,
    )
    .unwrap();

    let reg = registry();
    let lines = segment_artifact(&output, &reg.structural_glyphs());
    let reconstructed: Vec<String> = lines
        .iter()
        .map(|line| line.iter().map(|s| s.text.as_str()).collect())
        .collect();
    let original: Vec<&str> = output.lines().collect();
    assert_eq!(reconstructed, original);
}

#[test]
fn registered_style_is_usable_immediately() {
    use gridcast::{BorderStyle, TableSpec};

    let mut reg = registry();
    reg.register(
        "ascii",
        BorderStyle {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
            top_join: '+',
            bottom_join: '+',
            left_join: '+',
            right_join: '+',
            cross: '+',
        },
    );

    let spec = TableSpec::new(vec!["A".into()], vec![vec!["x".into()]], "ASCII");
    let output = render_text(&spec, &reg).unwrap();
    assert_eq!(output, "+---+\n| A |\n+---+\n| x |\n+---+\n");

    // The new style's glyphs join the structural set.
    assert!(reg.structural_glyphs().contains(&'+'));
    assert!(reg.structural_glyphs().contains(&'|'));
}

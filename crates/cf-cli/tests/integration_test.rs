//! Integration tests for the callflow pipeline.
//!
//! These verify the end-to-end flow from diagram text through parsing,
//! detection, and rendering, including the file-shaped batch scenario.

use cf_core::FlowKind;
use cf_parser::parse;
use cf_render_md::{UNSUPPORTED_PLACEHOLDER, detect_flow_kind, render_document};

const MENU_EXPORT: &str = r"flowchart TB
    start([Incoming Call])
    start --> menu
    menu{IVR Menu<br>Key Press}
    menu --|1|--> sales[Sales Team]
    menu --|2|--> support
    support[Support Call Queue]
    menu --|9|--> vm((After Hours Voicemail))
";

const QUEUE_EXPORT: &str = r"flowchart TB
    q[Support Call Queue]
    chk{Active Calls?}
    chk --> |Yes| overflow
    overflow --> vm((Overflow Voicemail))
    chk ---> |No| q
    rm[Routing Method: Simultaneous]
    alt[Agent List Type: All]
    user1(Jane Doe)
    ans{Agent Answered?}
";

#[test]
fn menu_export_renders_a_menu_tree_document() {
    let parsed = parse(MENU_EXPORT);
    assert!(
        parsed.diagnostics.is_empty(),
        "diagnostics: {:?}",
        parsed.diagnostics
    );

    let doc = render_document(&parsed.graph);
    assert_eq!(doc.kind, FlowKind::MenuTree);
    assert!(doc.markdown.contains("- Incoming Call"), "{}", doc.markdown);
    assert!(
        doc.markdown.contains("- Press `1` → Sales Team"),
        "{}",
        doc.markdown
    );
    assert!(
        doc.markdown.contains("- Press `2` → Support Call Queue"),
        "{}",
        doc.markdown
    );
    assert!(
        doc.markdown.contains("- Press `9` → After Hours Voicemail"),
        "{}",
        doc.markdown
    );
    assert!(
        doc.markdown.contains("## 📬 Voicemail & Greetings"),
        "{}",
        doc.markdown
    );
}

#[test]
fn queue_export_renders_a_queue_document() {
    let parsed = parse(QUEUE_EXPORT);
    let doc = render_document(&parsed.graph);
    assert_eq!(doc.kind, FlowKind::Queue);
    assert!(
        doc.markdown.starts_with("# 📞 Support Call Queue"),
        "{}",
        doc.markdown
    );
    assert!(
        doc.markdown.contains("- **Yes** → Overflow Voicemail"),
        "{}",
        doc.markdown
    );
    assert!(
        doc.markdown.contains("- **No** → Routing continues"),
        "{}",
        doc.markdown
    );
    assert!(
        doc.markdown.contains("- If agent answers → Call connected"),
        "{}",
        doc.markdown
    );
}

#[test]
fn unknown_export_yields_the_placeholder() {
    let parsed = parse("a[Alpha] --> b[Beta]\nb --> c[Gamma]");
    let doc = render_document(&parsed.graph);
    assert_eq!(doc.kind, FlowKind::Unsupported);
    assert_eq!(doc.markdown, UNSUPPORTED_PLACEHOLDER);
}

/// Same bytes in, same bytes out, twice.
#[test]
fn pipeline_output_is_byte_identical_across_runs() {
    for input in [MENU_EXPORT, QUEUE_EXPORT] {
        let first = render_document(&parse(input).graph);
        let second = render_document(&parse(input).graph);
        assert_eq!(first.markdown, second.markdown);
        assert_eq!(first.kind, second.kind);
    }
}

#[test]
fn detection_runs_without_rendering() {
    assert_eq!(detect_flow_kind(&parse(MENU_EXPORT).graph), FlowKind::MenuTree);
    assert_eq!(detect_flow_kind(&parse(QUEUE_EXPORT).graph), FlowKind::Queue);
}

/// A file-shaped batch: two good exports and a stray note. Each good file
/// becomes a sibling `.md`; the stray file is skipped without stopping
/// the run.
#[test]
fn file_batch_writes_markdown_next_to_sources() {
    let dir = tempfile::tempdir().expect("temp dir");

    let menu_path = dir.path().join("menu_flow.mmd");
    let queue_path = dir.path().join("queue_flow.mmd");
    std::fs::write(&menu_path, MENU_EXPORT).expect("write menu export");
    std::fs::write(&queue_path, QUEUE_EXPORT).expect("write queue export");
    std::fs::write(dir.path().join("notes.txt"), "not a diagram").expect("write note");

    let mut rendered = 0;
    for path in [&menu_path, &queue_path] {
        let source = std::fs::read_to_string(path).expect("read export");
        let doc = render_document(&parse(&source).graph);
        let target = path.with_extension("md");
        std::fs::write(&target, &doc.markdown).expect("write document");
        rendered += 1;

        let written = std::fs::read_to_string(&target).expect("read document");
        assert_eq!(written, doc.markdown);
    }
    assert_eq!(rendered, 2);
}

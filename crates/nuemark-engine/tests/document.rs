use insta::assert_snapshot;
use nuemark_engine::{
    Block, BlockKind, DEFAULT_SECTION_LEVEL, Document, MetaValue, RenderOptions, categorize,
    create_heading_id,
};
use pretty_assertions::assert_eq;

#[test]
fn front_matter_is_split_off() {
    let doc = Document::parse("---\ntitle: x\n---\nbody").unwrap();
    assert_eq!(doc.meta()["title"], MetaValue::String("x".into()));
    assert_eq!(doc.blocks(), &[Block::Content(vec!["body".into()])]);
}

#[test]
fn unclosed_front_matter_keeps_every_line() {
    let doc = Document::parse("---\ntitle: x\nbody").unwrap();
    assert!(doc.meta().is_empty());
    assert_eq!(
        doc.blocks().iter().map(Block::kind).collect::<Vec<_>>(),
        vec![BlockKind::Break, BlockKind::Content]
    );
}

#[test]
fn malformed_front_matter_fails() {
    assert!(Document::parse("---\n: : :\n  - [\n---\nbody").is_err());
}

#[test]
fn whole_line_bracket_is_a_tag() {
    let doc = Document::parse("[x]\n\nsee [x]").unwrap();
    assert_eq!(doc.blocks()[0].kind(), BlockKind::Tag);
}

#[test]
fn categorize_by_level() {
    let doc = Document::parse("# A\n\np\n\n## B\n\np\n\np").unwrap();
    let blocks: Vec<Block> = doc
        .blocks()
        .iter()
        .filter(|b| **b != Block::Newline)
        .cloned()
        .collect();
    let sections = categorize(&blocks, DEFAULT_SECTION_LEVEL).unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].len(), 2);
    assert_eq!(sections[1].len(), 3);
    assert_eq!(categorize(&blocks[1..2], 2), None);
}

#[test]
fn heading_id() {
    assert_eq!(create_heading_id("Hello, World!"), "hello-world");
}

#[test]
fn toc_per_section() {
    let doc = Document::parse(
        "# Guide\n\n## Install {#setup}\n\n### From source\n\n#### Too deep\n\n## Usage\n\ntext",
    )
    .unwrap();
    assert_snapshot!(doc.render_toc(), @r##"
    <div class="toc"><nav><a href="#setup">Install</a>
    <a href="#from-source">From source</a></nav>
    <nav><a href="#usage">Usage</a></nav></div>
    "##);
}

#[test]
fn toc_without_sections() {
    let doc = Document::parse("### Only *three*\n\ntext").unwrap();
    assert_eq!(
        doc.render_toc(),
        r##"<div class="toc"><nav><a href="#only-three">Only three</a></nav></div>"##
    );
}

#[test]
fn toc_without_headings_is_empty() {
    let doc = Document::parse("just text").unwrap();
    assert_eq!(doc.render_toc(), r#"<div class="toc"></div>"#);
}

#[test]
fn unsectioned_render_sections_falls_back() {
    let doc = Document::parse("### small\n\ntext").unwrap();
    assert!(doc.sections().is_none());
    assert_eq!(
        doc.render_sections(&["a".into()], RenderOptions::default())
            .unwrap(),
        "<h3>small</h3>\n\n<p>text</p>"
    );
}

#[test]
fn title_and_description() {
    let doc = Document::parse("Lead paragraph\nsecond\n\n# Heading").unwrap();
    assert_eq!(doc.title(), "Heading");
    assert_eq!(doc.description(), Some("Lead paragraph"));
}

#[test]
fn crlf_input() {
    let doc = Document::parse("# Title\r\n\r\n- a\r\n- b\r\n").unwrap();
    assert_eq!(
        doc.render(RenderOptions::default()).unwrap(),
        "<h1>Title</h1>\n\n<ul><li><p>a</p></li>\n<li><p>b</p></li></ul>"
    );
}

use std::collections::BTreeMap;

use insta::assert_snapshot;
use nuemark_engine::{
    BoxError, Document, RenderData, RenderOptions, Renderer, TagBlock, TagRegistry, TagRenderer,
    parse_blocks, parsing::lines::split_lines,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fixture(name: &str) -> Document {
    let text = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    Document::parse(&text).unwrap()
}

fn html(src: &str) -> String {
    Document::parse(src)
        .unwrap()
        .render(RenderOptions::default())
        .unwrap()
}

#[test]
fn fixture_article() {
    assert_snapshot!(fixture("article").render(RenderOptions::default()).unwrap(), @r#"
    <h1 id="top">Nuemark 1.0</h1>

    <p>Nuemark is <em>content first</em>. See the <a href="/docs" title="Documentation">docs</a> for the <strong>full</strong> syntax.</p>

    <h2>Getting started</h2>

    <ol><li><p>Install it</p></li>
    <li><p>Write <code>index.md</code></p></li></ol>

    <blockquote><p>Simple things should be simple.</p></blockquote>

    <h2>Reference</h2>

    <table><tr><th>Option</th><th>Default</th></tr>
    <tr><td><code>toc</code></td><td>off</td></tr></table>
    "#);
}

#[test]
fn fixture_article_sections() {
    let doc = fixture("article");
    let options = RenderOptions {
        data: RenderData {
            sections: Some(vec!["intro".into(), "start".into()]),
            ..Default::default()
        },
        ..Default::default()
    };
    let html = doc.render(options).unwrap();
    assert!(html.starts_with(r#"<section class="intro"><h1 id="top">"#));
    assert!(html.contains("\n<section class=\"start\"><h2>Getting started</h2>"));
    assert!(html.contains("\n<section><h2>Reference</h2>"));
    assert_eq!(html.matches("</section>").count(), 3);
}

#[test]
fn fixture_tags() {
    assert_snapshot!(fixture("tags").render(RenderOptions::default()).unwrap(), @r#"
    <div class="hero dark"><h1>Welcome</h1>

    <p>Intro text</p></div>

    <figure><img alt="The view" src="hero.png"><figcaption>The view</figcaption></figure>

    <p>Plain closing paragraph.</p>
    "#);
}

#[rstest]
#[case("- a\n- b\n- c", "<ul><li><p>a</p></li>\n<li><p>b</p></li>\n<li><p>c</p></li></ul>")]
#[case("1. a\n2. b", "<ol><li><p>a</p></li>\n<li><p>b</p></li></ol>")]
#[case(
    "- a\n  - b",
    "<ul><li><p>a</p>\n<ul><li><p>b</p></li></ul></li></ul>"
)]
#[case("> a\n>\n> b", "<blockquote><p>a</p>\n\n<p>b</p></blockquote>")]
#[case("---", "<hr>")]
#[case("text\n\n\n\nmore", "<p>text</p>\n\n<p>more</p>")]
#[case("Title\n===", "<h1>Title</h1>")]
#[case("***both***", "<p><em><strong>both</strong></em></p>")]
fn block_rendering(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(html(src), expected);
}

#[test]
fn bracketed_prose_stays_a_paragraph() {
    assert_eq!(
        html("[read more] if you're curious, or [skip]\n\n[read more]: /more\n[skip]: /skip"),
        r#"<p><a href="/more">read more</a> if you're curious, or <a href="/skip">skip</a></p>"#
    );
}

#[test]
fn code_fence_is_raw() {
    assert_eq!(
        html("```md numbered\n# *not* parsed\n```"),
        "<pre><code language=\"md\"><span class=\"line\"># *not* parsed</span></code></pre>"
    );
}

#[test]
fn reflink_defined_after_use_resolves() {
    assert_eq!(
        html("[Third][bar]\n\n[bar]: /something \"subject\""),
        r#"<p><a href="/something" title="subject">Third</a></p>"#
    );
}

#[test]
fn reflink_redefinition_last_wins() {
    assert_eq!(
        html("see [x]\n\n[x]: /first\n[x]: /second"),
        r#"<p>see <a href="/second">x</a></p>"#
    );
}

#[test]
fn data_links_win_over_document_reflinks() {
    let doc = Document::parse("[a] and [b]\n\n[a]: /doc-a").unwrap();
    let options = RenderOptions {
        data: RenderData {
            links: BTreeMap::from([
                ("a".to_string(), "/override".to_string()),
                ("b".to_string(), "/b \"Bee\"".to_string()),
            ]),
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(
        doc.render(options).unwrap(),
        r#"<p><a href="/override">a</a> and <a href="/b" title="Bee">b</a></p>"#
    );
    assert_eq!(doc.reflinks().get("a").unwrap().href, "/doc-a");
}

#[test]
fn repeated_renders_are_identical() {
    let doc = fixture("article");
    let mut count = 0;
    let mut first = String::new();
    for _ in 0..2 {
        let mut hook = |block: &mut nuemark_engine::Block| {
            count += 1;
            if let nuemark_engine::Block::Content(lines) = block {
                lines.push("(annotated)".into());
            }
        };
        let options = RenderOptions {
            before_render: Some(&mut hook),
            ..Default::default()
        };
        let html = doc.render(options).unwrap();
        if first.is_empty() {
            first = html;
        } else {
            assert_eq!(html, first);
        }
    }
    assert!(first.contains("syntax. (annotated)</p>"));
    assert!(count > 0);
    assert_eq!(
        doc.render(RenderOptions::default()).unwrap(),
        fixture("article").render(RenderOptions::default()).unwrap()
    );
}

struct Counter;

impl TagRenderer for Counter {
    fn render_tag(&self, tag: &TagBlock, renderer: &mut Renderer<'_>) -> Result<String, BoxError> {
        let body = renderer.render(&tag.blocks)?;
        Ok(format!("<x-counter start=\"{}\">{body}</x-counter>", tag.data.get_str("start").unwrap_or("0")))
    }
}

#[test]
fn custom_tags_render_nested_blocks() {
    let mut registry = TagRegistry::new();
    registry.register("counter", Counter);
    let (blocks, reflinks) = parse_blocks(&split_lines("[counter start=5]\n  Count *up*"));
    let options = RenderOptions {
        tags: Some(&registry),
        ..Default::default()
    };
    let html = Renderer::new(&reflinks, options).render(&blocks).unwrap();
    assert_eq!(html, "<x-counter start=\"5\"><p>Count <em>up</em></p></x-counter>");
}

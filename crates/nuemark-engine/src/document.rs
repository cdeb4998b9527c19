use std::ops::Range;

use crate::{
    error::{DocumentError, RenderError},
    parsing::{
        attrs::Attrs,
        blocks::Block,
        front_matter::{Meta, MetaParser, YamlMeta, extract_front_matter},
        inline::plain_text,
        lines::split_lines,
        parse_blocks,
        reflinks::{Reflinks, parse_link_title},
    },
    render::{RenderOptions, Renderer, create_heading_id, elem, html::escape},
    sections::{DEFAULT_SECTION_LEVEL, section_ranges},
};

/// Heading levels listed in the table of contents.
const TOC_LEVELS: [u8; 2] = [2, 3];

/// One parsed document.
///
/// Built once from source lines: front matter is split off, the remaining
/// lines are parsed into blocks and reflinks, and section boundaries are
/// computed. Blocks never change afterwards; [`Document::add_reflink`] is the
/// only mutation.
///
/// ```rust
/// # use nuemark_engine::{Document, RenderOptions};
/// let doc = Document::parse("---\ntitle: Hi\n---\n# Hello\n\nSee [docs].\n\n[docs]: /docs").unwrap();
/// assert_eq!(doc.title(), "Hello");
/// let html = doc.render(RenderOptions::default()).unwrap();
/// assert!(html.contains(r#"<a href="/docs">docs</a>"#));
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    meta: Meta,
    blocks: Vec<Block>,
    reflinks: Reflinks,
    /// Block index ranges at [`DEFAULT_SECTION_LEVEL`], `None` if unsectioned.
    sections: Option<Vec<Range<usize>>>,
}

impl Document {
    /// Parses text with YAML front matter.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        Self::from_lines(&split_lines(text), &YamlMeta)
    }

    pub fn from_lines(lines: &[String], meta_parser: &dyn MetaParser) -> Result<Self, DocumentError> {
        let (meta, body) =
            extract_front_matter(lines, meta_parser).map_err(DocumentError::FrontMatter)?;
        let (blocks, reflinks) = parse_blocks(body);
        let sections = section_ranges(&blocks, DEFAULT_SECTION_LEVEL);

        log::debug!(
            "parsed {} blocks, {} reflinks, {} sections",
            blocks.len(),
            reflinks.len(),
            sections.as_ref().map_or(0, Vec::len)
        );

        Ok(Self {
            meta,
            blocks,
            reflinks,
            sections,
        })
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn reflinks(&self) -> &Reflinks {
        &self.reflinks
    }

    /// Text of the first level-1 heading, looking inside the first tag block
    /// when the top level has none. Empty if neither has one.
    pub fn title(&self) -> &str {
        let first_tag = self.blocks.iter().find_map(|block| match block {
            Block::Tag(tag) => Some(tag.blocks.as_slice()),
            _ => None,
        });
        find_title(&self.blocks)
            .or_else(|| first_tag.and_then(find_title))
            .unwrap_or("")
    }

    /// First line of the first paragraph.
    pub fn description(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Content(lines) => lines.first().map(String::as_str),
            _ => None,
        })
    }

    pub fn sections(&self) -> Option<Vec<&[Block]>> {
        let ranges = self.sections.as_ref()?;
        Some(ranges.iter().map(|r| &self.blocks[r.clone()]).collect())
    }

    /// Registers a reflink after parsing. `href` may carry a `"title"`.
    pub fn add_reflink(&mut self, label: impl Into<String>, href: &str) {
        self.reflinks.insert(label, parse_link_title(href));
    }

    /// Renders the document. With `options.data.sections` set this is
    /// [`Document::render_sections`] with those classes.
    pub fn render(&self, mut options: RenderOptions<'_>) -> Result<String, RenderError> {
        match options.data.sections.take() {
            Some(classes) => self.render_sections(&classes, options),
            None => Renderer::new(&self.reflinks, options).render(&self.blocks),
        }
    }

    /// Wraps each section in `<section class="classes[i]">`. Blocks before the
    /// first section are not rendered. A document without sections renders
    /// in full.
    pub fn render_sections(
        &self,
        classes: &[String],
        options: RenderOptions<'_>,
    ) -> Result<String, RenderError> {
        let mut renderer = Renderer::new(&self.reflinks, options);
        let Some(sections) = self.sections() else {
            return renderer.render(&self.blocks);
        };

        let mut html = Vec::with_capacity(sections.len());
        for (i, blocks) in sections.into_iter().enumerate() {
            let class = classes.get(i).map_or("", String::as_str);
            let body = renderer.render(blocks)?;
            html.push(elem("section", &Attrs::from([("class", class)]), &body));
        }
        Ok(html.join("\n"))
    }

    /// `<div class="toc">` with one `<nav>` of level 2 and 3 heading links per
    /// section. An unsectioned document is one section.
    pub fn render_toc(&self) -> String {
        let groups = self
            .sections()
            .unwrap_or_else(|| vec![self.blocks.as_slice()]);
        let navs: Vec<String> = groups.into_iter().filter_map(render_nav).collect();
        elem("div", &Attrs::from([("class", "toc")]), &navs.join("\n"))
    }
}

fn find_title(blocks: &[Block]) -> Option<&str> {
    blocks
        .iter()
        .filter_map(Block::as_heading)
        .find(|h| h.level == 1)
        .map(|h| h.text.as_str())
        .filter(|text| !text.is_empty())
}

fn render_nav(blocks: &[Block]) -> Option<String> {
    let links: Vec<String> = blocks
        .iter()
        .filter_map(Block::as_heading)
        .filter(|h| TOC_LEVELS.contains(&h.level))
        .map(|h| {
            let id = h
                .attr
                .id()
                .map_or_else(|| create_heading_id(&h.text), str::to_string);
            let href = Attrs::from([("href", format!("#{id}"))]);
            elem("a", &href, &escape(&plain_text(&h.tokens)))
        })
        .collect();
    if links.is_empty() {
        return None;
    }
    Some(elem("nav", &Attrs::new(), &links.join("\n")))
}

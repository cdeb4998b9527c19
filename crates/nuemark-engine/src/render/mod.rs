//! # Rendering
//!
//! Dispatch-and-recurse from [`Block`]s to an HTML fragment.
//!
//! ## Modules
//!
//! - **`html`**: `elem`, attribute rendering and `wrap_class`
//! - **`inline`**: token rendering with reference resolution
//! - **`heading_id`**: heading slugs
//! - **`highlight`**: `Highlighter` collaborator and `PlainHighlighter`
//! - **`tags`**: `TagRenderer` collaborator, `HtmlTags`, `TagRegistry`
//!
//! A [`Renderer`] owns the effective reflink table for one render pass, so
//! rendering never mutates the document.

pub mod heading_id;
pub mod highlight;
pub mod html;
pub mod inline;
pub mod tags;

use std::collections::BTreeMap;

use crate::{
    error::RenderError,
    parsing::{
        attrs::{AttrValue, Attrs},
        blocks::{Block, CodeBlock, Heading, List, Table},
        inline::{Token, plain_text, tokenize},
        reflinks::Reflinks,
    },
};

pub use heading_id::create_heading_id;
pub use highlight::{HighlightOptions, Highlighter, PlainHighlighter};
pub use html::{elem, wrap_class};
pub use tags::{HtmlTags, TagRegistry, TagRenderer};

static PLAIN_HIGHLIGHTER: PlainHighlighter = PlainHighlighter;
static HTML_TAGS: HtmlTags = HtmlTags;

/// Caller-supplied render data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderData {
    /// Section classes. `Some` renders the document as `<section>` elements.
    pub sections: Option<Vec<String>>,
    /// Give every heading an id and a leading anchor link.
    pub heading_ids: bool,
    /// Extra reflinks (`label → href "title"`). These win over the document's.
    pub links: BTreeMap<String, String>,
}

/// Called once per block, in order, before the block renders.
///
/// The visitor sees a render-local copy; it may rewrite the block but not
/// change its kind.
pub trait BlockVisitor {
    fn visit(&mut self, block: &mut Block);
}

impl<F: FnMut(&mut Block)> BlockVisitor for F {
    fn visit(&mut self, block: &mut Block) {
        self(block)
    }
}

#[derive(Default)]
pub struct RenderOptions<'a> {
    pub data: RenderData,
    pub before_render: Option<&'a mut dyn BlockVisitor>,
    /// Defaults to [`PlainHighlighter`].
    pub highlighter: Option<&'a dyn Highlighter>,
    /// Defaults to [`HtmlTags`].
    pub tags: Option<&'a dyn TagRenderer>,
}

pub struct Renderer<'a> {
    reflinks: Reflinks,
    heading_ids: bool,
    highlighter: &'a dyn Highlighter,
    tags: &'a dyn TagRenderer,
    before_render: Option<&'a mut dyn BlockVisitor>,
}

impl<'a> Renderer<'a> {
    /// `reflinks` are overlaid with `options.data.links`.
    pub fn new(reflinks: &Reflinks, options: RenderOptions<'a>) -> Self {
        Self {
            reflinks: reflinks.merged_with(&options.data.links),
            heading_ids: options.data.heading_ids,
            highlighter: options.highlighter.unwrap_or(&PLAIN_HIGHLIGHTER),
            tags: options.tags.unwrap_or(&HTML_TAGS),
            before_render: options.before_render,
        }
    }

    /// The effective reflink table for this render.
    pub fn reflinks(&self) -> &Reflinks {
        &self.reflinks
    }

    pub fn render(&mut self, blocks: &[Block]) -> Result<String, RenderError> {
        let mut html = Vec::with_capacity(blocks.len());
        for (position, block) in blocks.iter().enumerate() {
            html.push(self.render_block(position, block)?);
        }
        Ok(html.join("\n"))
    }

    pub fn render_inline(&self, tokens: &[Token]) -> String {
        inline::render_tokens(tokens, &self.reflinks)
    }

    fn render_block(&mut self, position: usize, block: &Block) -> Result<String, RenderError> {
        let visited;
        let block = match self.before_render.as_deref_mut() {
            Some(hook) => {
                let mut copy = block.clone();
                hook.visit(&mut copy);
                if copy.kind() != block.kind() {
                    return Err(RenderError::KindChanged {
                        position,
                        expected: block.kind(),
                        found: copy.kind(),
                    });
                }
                visited = copy;
                &visited
            }
            None => block,
        };

        match block {
            Block::Content(lines) => Ok(self.render_content(lines)),
            Block::Heading(heading) => Ok(self.render_heading(heading)),
            Block::Quote(blocks) => Ok(elem("blockquote", &Attrs::new(), &self.render(blocks)?)),
            Block::Tag(tag) => {
                let tags = self.tags;
                tags.render_tag(tag, self).map_err(|source| RenderError::Tag {
                    position,
                    name: tag.name.clone(),
                    source,
                })
            }
            Block::Table(table) => Ok(self.render_table(table)),
            Block::List(list) => self.render_list(list),
            Block::Code(code) => self.render_code(position, code),
            Block::Newline => Ok(String::new()),
            Block::Break => Ok("<hr>".to_string()),
        }
    }

    fn render_content(&self, lines: &[String]) -> String {
        let html: Vec<String> = lines
            .iter()
            .map(|line| self.render_inline(&tokenize(line)))
            .collect();
        elem("p", &Attrs::new(), &html.join(" "))
    }

    fn render_heading(&self, heading: &Heading) -> String {
        let mut attr = heading.attr.clone();
        let mut body = String::new();

        if self.heading_ids {
            let id = match attr.id() {
                Some(id) => id.to_string(),
                None => create_heading_id(&heading.text),
            };
            let anchor = Attrs::from([
                ("href", format!("#{id}")),
                ("title", plain_text(&heading.tokens)),
            ]);
            body.push_str(&elem("a", &anchor, ""));
            attr.insert("id", id);
        }

        body.push_str(&self.render_inline(&heading.tokens));
        elem(&format!("h{}", heading.level), &attr, &body)
    }

    fn render_list(&mut self, list: &List) -> Result<String, RenderError> {
        let mut items = Vec::with_capacity(list.items.len());
        for item in &list.items {
            items.push(elem("li", &Attrs::new(), &self.render(item)?));
        }
        let name = if list.numbered { "ol" } else { "ul" };
        Ok(elem(name, &Attrs::new(), &items.join("\n")))
    }

    fn render_table(&self, table: &Table) -> String {
        let rows: Vec<String> = table
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let cell = if table.head && i == 0 { "th" } else { "td" };
                let cells: String = row
                    .iter()
                    .map(|tokens| elem(cell, &Attrs::new(), &self.render_inline(tokens)))
                    .collect();
                elem("tr", &Attrs::new(), &cells)
            })
            .collect();
        elem("table", &table.attr, &rows.join("\n"))
    }

    fn render_code(&self, position: usize, code: &CodeBlock) -> Result<String, RenderError> {
        let options = HighlightOptions {
            language: &code.name,
            numbered: code.data.numbered,
        };
        let body = self
            .highlighter
            .highlight(&code.code, &options)
            .map_err(|source| RenderError::Highlight {
                position,
                language: code.name.clone(),
                source,
            })?;

        let mut attr = code.attr.clone();
        let class = attr.remove("class");
        let pre = elem("pre", &attr, &body);
        Ok(match class {
            Some(AttrValue::Str(class)) => wrap_class(&class, &pre),
            _ => pre,
        })
    }
}

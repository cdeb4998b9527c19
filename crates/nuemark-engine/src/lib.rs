//! # nuemark-engine
//!
//! Compiles Nuemark, a Markdown dialect with tag blocks, front matter and
//! sections, into HTML.
//!
//! ## Pipeline
//!
//! 1. **Front matter** (`parsing::front_matter`): a leading `---` block is
//!    split off and handed to a [`MetaParser`]
//! 2. **Blocks** (`parsing::blocks`): lines are classified and built into a
//!    [`Block`] tree; reflink definitions are collected on the way
//! 3. **Sections** (`sections`): block ranges between level 1-2 headings
//! 4. **Rendering** (`render`): blocks become HTML, with inline tokens
//!    (`parsing::inline`) resolved against the reflink table
//!
//! [`Document`] ties the steps together.

pub mod document;
pub mod error;
pub mod parsing;
pub mod render;
pub mod sections;

pub use document::Document;
pub use error::{BoxError, DocumentError, RenderError};
pub use parsing::{
    attrs::{AttrValue, Attrs},
    blocks::{Block, BlockKind, TagBlock},
    front_matter::{Meta, MetaParser, MetaValue, YamlMeta},
    inline::{Token, tokenize},
    parse_blocks,
    reflinks::{Reflink, Reflinks},
};
pub use render::{
    BlockVisitor, HighlightOptions, Highlighter, HtmlTags, PlainHighlighter, RenderData,
    RenderOptions, Renderer, TagRegistry, TagRenderer, create_heading_id,
};
pub use sections::{DEFAULT_SECTION_LEVEL, categorize};

use std::fmt;

use crate::parsing::{attrs::Attrs, inline::Token};

/// One node of the parsed document tree.
///
/// Quote, list and tag blocks own their nested block sequences; the tree has
/// no back-references.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A paragraph: its trimmed source lines, tokenized when rendered.
    Content(Vec<String>),
    Heading(Heading),
    /// A blockquote with its recursively parsed body.
    Quote(Vec<Block>),
    Tag(TagBlock),
    Table(Table),
    List(List),
    Code(CodeBlock),
    /// Separator left by a run of blank lines. Renders as nothing.
    Newline,
    /// Horizontal rule.
    Break,
}

/// Fieldless discriminant of [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Content,
    Heading,
    Quote,
    Tag,
    Table,
    List,
    Code,
    Newline,
    Break,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Content => "content",
            BlockKind::Heading => "heading",
            BlockKind::Quote => "quote",
            BlockKind::Tag => "tag",
            BlockKind::Table => "table",
            BlockKind::List => "list",
            BlockKind::Code => "code",
            BlockKind::Newline => "newline",
            BlockKind::Break => "break",
        };
        f.write_str(name)
    }
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Content(_) => BlockKind::Content,
            Block::Heading(_) => BlockKind::Heading,
            Block::Quote(_) => BlockKind::Quote,
            Block::Tag(_) => BlockKind::Tag,
            Block::Table(_) => BlockKind::Table,
            Block::List(_) => BlockKind::List,
            Block::Code(_) => BlockKind::Code,
            Block::Newline => BlockKind::Newline,
            Block::Break => BlockKind::Break,
        }
    }

    /// Heading level, or `None` for every other kind.
    pub fn level(&self) -> Option<u8> {
        match self {
            Block::Heading(h) => Some(h.level),
            _ => None,
        }
    }

    pub fn as_heading(&self) -> Option<&Heading> {
        match self {
            Block::Heading(h) => Some(h),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    /// 1 to 6.
    pub level: u8,
    pub attr: Attrs,
    pub tokens: Vec<Token>,
    /// Heading source text without the attribute block. Used for ids and the TOC.
    pub text: String,
}

/// A custom directive block: `[name args]` followed by an indented body.
#[derive(Debug, Clone, PartialEq)]
pub struct TagBlock {
    /// Empty for the `[.class]` / `[#id]` shorthand.
    pub name: String,
    /// `id` and `class`.
    pub attr: Attrs,
    /// All other arguments, interpreted by the tag renderer.
    pub data: Attrs,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Rows of cells, each cell a token sequence.
    pub rows: Vec<Vec<Vec<Token>>>,
    pub attr: Attrs,
    /// The first row is a header row.
    pub head: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct List {
    /// One nested block sequence per item, in source order.
    pub items: Vec<Vec<Block>>,
    pub numbered: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    /// Language id from the fence info string; may be empty.
    pub name: String,
    /// Raw code, lines joined with `\n`.
    pub code: String,
    pub attr: Attrs,
    pub data: CodeData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeData {
    /// Render line numbers.
    pub numbered: bool,
}

use crate::parsing::{
    attrs::{parse_attrs, split_trailing_block},
    blocks::types::Heading,
    inline::tokenize,
};

/// ATX (`## Title`) and setext (`Title` over `===`) heading syntax.
pub struct HeadingSyntax;

impl HeadingSyntax {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Recognizes an ATX heading, returning its level and raw text.
    /// A closing `#` sequence is removed.
    pub fn atx(line: &str) -> Option<(u8, &str)> {
        let t = line.trim_start_matches(' ');
        if line.len() - t.len() > 3 {
            return None;
        }
        let level = t.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &t[level..];
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            return None;
        }

        let text = rest.trim();
        let text = match text.trim_end_matches(Self::MARKER) {
            stripped if stripped.is_empty() => stripped,
            stripped if stripped.ends_with([' ', '\t']) => stripped.trim_end(),
            _ => text,
        };
        Some((level as u8, text))
    }

    /// Level for a setext underline: `===` is 1, `---` is 2.
    pub fn setext_level(underline: &str) -> Option<u8> {
        let t = underline.trim();
        if underline.len() - underline.trim_start().len() > 3 || t.is_empty() {
            return None;
        }
        if t.chars().all(|c| c == '=') {
            Some(1)
        } else if t.chars().all(|c| c == '-') {
            Some(2)
        } else {
            None
        }
    }

    /// Builds the heading block from raw text with an optional `{...}` block.
    pub fn build(level: u8, raw: &str) -> Heading {
        let (text, block) = split_trailing_block(raw);
        Heading {
            level,
            attr: block.map(parse_attrs).unwrap_or_default(),
            tokens: tokenize(text),
            text: text.to_string(),
        }
    }
}

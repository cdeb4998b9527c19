use crate::parsing::{
    lines::is_blank,
    reflinks::{Reflink, parse_definition},
};

use super::kinds::{
    BlockQuote, CodeFence, FenceSig, HeadingSyntax, ListItem, ListMarker, TableSyntax, TagHeader,
    TagSyntax, ThematicBreak,
};

/// What a line opens, decided from the line itself plus one line of
/// look-ahead.
///
/// This is phase 1 of block parsing. Variants are listed in the order the
/// classifier tries them; the first match wins.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass<'a> {
    Blank,
    /// ATX heading, or setext when `underlined` (the next line is consumed).
    Heading {
        level: u8,
        text: &'a str,
        underlined: bool,
    },
    FenceOpen(FenceSig),
    Break,
    ListItem(ListMarker),
    Quote,
    /// Header row of a pipe table; the next line is its separator.
    TableHeader,
    RefDef {
        label: String,
        link: Reflink,
    },
    Tag(TagHeader),
    Text,
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies `line`. `next` is the following line, if any.
    ///
    /// `in_paragraph` disables setext headings so that an underline after a
    /// multi-line paragraph is read as a rule rather than re-heading the
    /// last line.
    pub fn classify<'a>(&self, line: &'a str, next: Option<&str>, in_paragraph: bool) -> LineClass<'a> {
        if is_blank(line) {
            return LineClass::Blank;
        }
        if let Some((level, text)) = HeadingSyntax::atx(line) {
            return LineClass::Heading {
                level,
                text,
                underlined: false,
            };
        }

        let class = self.classify_structural(line, next);
        if class == LineClass::Text && !in_paragraph {
            if let Some(level) = next.and_then(HeadingSyntax::setext_level) {
                return LineClass::Heading {
                    level,
                    text: line.trim(),
                    underlined: true,
                };
            }
        }
        class
    }

    fn classify_structural<'a>(&self, line: &'a str, next: Option<&str>) -> LineClass<'a> {
        if let Some(sig) = CodeFence::sig(line) {
            return LineClass::FenceOpen(sig);
        }
        if ThematicBreak::matches(line) {
            return LineClass::Break;
        }
        if let Some(marker) = ListItem::marker(line) {
            return LineClass::ListItem(marker);
        }
        if BlockQuote::strip_prefix(line).is_some() {
            return LineClass::Quote;
        }
        if TableSyntax::is_row(line) && next.is_some_and(TableSyntax::is_separator) {
            return LineClass::TableHeader;
        }
        if let Some((label, link)) = parse_definition(line) {
            return LineClass::RefDef { label, link };
        }
        if let Some(header) = TagSyntax::header(line) {
            return LineClass::Tag(header);
        }
        LineClass::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kind(line: &str, next: Option<&str>) -> &'static str {
        match LineClassifier.classify(line, next, false) {
            LineClass::Blank => "blank",
            LineClass::Heading { underlined: false, .. } => "atx",
            LineClass::Heading { underlined: true, .. } => "setext",
            LineClass::FenceOpen(_) => "fence",
            LineClass::Break => "break",
            LineClass::ListItem(_) => "list",
            LineClass::Quote => "quote",
            LineClass::TableHeader => "table",
            LineClass::RefDef { .. } => "refdef",
            LineClass::Tag(_) => "tag",
            LineClass::Text => "text",
        }
    }

    #[rstest]
    #[case("   ", None, "blank")]
    #[case("# Title", None, "atx")]
    #[case("Title", Some("====="), "setext")]
    #[case("```js", None, "fence")]
    #[case("***", None, "break")]
    #[case("- - -", None, "break")]
    #[case("- item", None, "list")]
    #[case("3. item", None, "list")]
    #[case("> quoted", None, "quote")]
    #[case("| a | b |", Some("|---|---|"), "table")]
    #[case("| a | b |", Some("| c | d |"), "text")]
    #[case("[docs]: /docs", None, "refdef")]
    #[case("[image src=a.png]", None, "tag")]
    #[case("plain text", None, "text")]
    fn classifies_by_priority(
        #[case] line: &str,
        #[case] next: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(kind(line, next), expected);
    }

    #[test]
    fn setext_needs_a_plain_line() {
        assert_eq!(kind("- item", Some("---")), "list");
        assert_eq!(kind("> quote", Some("===")), "quote");
    }

    #[test]
    fn no_setext_inside_paragraph() {
        assert_eq!(
            LineClassifier.classify("second line", Some("---"), true),
            LineClass::Text
        );
    }

    #[test]
    fn setext_heading_text_is_trimmed() {
        assert_eq!(
            LineClassifier.classify("  Title  ", Some("---"), false),
            LineClass::Heading {
                level: 2,
                text: "Title",
                underlined: true
            }
        );
    }
}

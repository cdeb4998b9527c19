use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::attrs::{Attrs, is_attr_list, parse_attrs};

static TAG_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([a-z][\w-]*)?((?:[#.][\w-]+)*)(?:\s+(.*))?\]\s*$").expect("tag line regex")
});

/// The opening line of a tag block, e.g. `[image src="a.png" .wide]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagHeader {
    pub name: String,
    pub attr: Attrs,
    pub data: Attrs,
}

pub struct TagSyntax;

impl TagSyntax {
    pub fn header(line: &str) -> Option<TagHeader> {
        let caps = TAG_LINE.captures(line.trim_end())?;
        let name = caps.get(1).map_or("", |m| m.as_str());
        let shorthand = caps.get(2).map_or("", |m| m.as_str());
        let args = caps.get(3).map_or("", |m| m.as_str());

        if name.is_empty() && shorthand.is_empty() {
            return None;
        }
        // Prose that happens to sit in brackets stays a paragraph.
        if !is_attr_list(args) {
            return None;
        }

        let mut attrs = parse_attrs(shorthand);
        for (key, value) in parse_attrs(args).iter() {
            match (key, value.as_str()) {
                ("class", Some(classes)) => classes.split(' ').for_each(|c| attrs.add_class(c)),
                _ => attrs.insert(key, value.clone()),
            }
        }
        let (attr, data) = attrs.partition_html();

        Some(TagHeader {
            name: name.to_string(),
            attr,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn named_tag_with_arguments() {
        let tag = TagSyntax::header(r#"[image src="hero.png" .wide caption="A [nice] view"]"#)
            .unwrap();
        assert_eq!(tag.name, "image");
        assert_eq!(tag.attr, Attrs::from([("class", "wide")]));
        assert_eq!(tag.data.get_str("src"), Some("hero.png"));
        assert_eq!(tag.data.get_str("caption"), Some("A [nice] view"));
    }

    #[test]
    fn class_shorthand_without_name() {
        let tag = TagSyntax::header("[.note.info]").unwrap();
        assert_eq!(tag.name, "");
        assert_eq!(tag.attr.get_str("class"), Some("note info"));
    }

    #[test]
    fn name_with_compact_attributes() {
        let tag = TagSyntax::header("[section#intro.dark]").unwrap();
        assert_eq!(tag.name, "section");
        assert_eq!(tag.attr.id(), Some("intro"));
        assert_eq!(tag.attr.get_str("class"), Some("dark"));
    }

    #[rstest]
    #[case("[a] and [b]")]
    #[case("[Upper]")]
    #[case("[link](/x)")]
    #[case("[]")]
    #[case("text [tag]")]
    #[case("[read more] if you're curious, or [skip]")]
    #[case("[see [this] page]")]
    fn rejects_non_tags(#[case] line: &str) {
        assert_eq!(TagSyntax::header(line), None);
    }
}

//! Leading `---` fenced metadata.
//!
//! Extraction is pure: it returns the parsed [`Meta`] and the remaining lines
//! without touching the input. The metadata format itself is delegated to a
//! [`MetaParser`]; [`YamlMeta`] is the stock one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{error::BoxError, parsing::lines::is_blank};

pub const FENCE: &str = "---";

/// A front matter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<MetaValue>),
    Map(BTreeMap<String, MetaValue>),
}

impl MetaValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetaValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

pub type Meta = BTreeMap<String, MetaValue>;

/// Parses the text between the front matter fences.
pub trait MetaParser {
    fn parse(&self, text: &str) -> Result<Meta, BoxError>;
}

/// YAML front matter via `serde_yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlMeta;

impl MetaParser for YamlMeta {
    fn parse(&self, text: &str) -> Result<Meta, BoxError> {
        if text.trim().is_empty() {
            return Ok(Meta::new());
        }
        let meta: Option<Meta> = serde_yaml::from_str(text)?;
        Ok(meta.unwrap_or_default())
    }
}

fn is_fence(line: &str) -> bool {
    line.trim_end_matches('\r') == FENCE
}

/// Splits front matter off `lines`.
///
/// Without an opening fence the meta is empty and every line is returned.
/// An opening fence that is never closed is not front matter either.
pub fn extract_front_matter<'a>(
    lines: &'a [String],
    parser: &dyn MetaParser,
) -> Result<(Meta, &'a [String]), BoxError> {
    let Some(open) = lines.iter().position(|line| !is_blank(line)) else {
        return Ok((Meta::new(), lines));
    };
    if !is_fence(&lines[open]) {
        return Ok((Meta::new(), lines));
    }

    let body = &lines[open + 1..];
    let Some(close) = body.iter().position(|line| is_fence(line)) else {
        log::warn!("front matter fence opened but never closed; treating it as content");
        return Ok((Meta::new(), lines));
    };

    let meta = parser.parse(&body[..close].join("\n"))?;
    Ok((meta, &body[close + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::lines::split_lines;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_front_matter() {
        let lines = split_lines("# Title\nbody");
        let (meta, rest) = extract_front_matter(&lines, &YamlMeta).unwrap();
        assert!(meta.is_empty());
        assert_eq!(rest, &lines[..]);
    }

    #[test]
    fn parses_yaml_between_fences() {
        let lines = split_lines("---\ntitle: x\ndraft: true\n---\nbody");
        let (meta, rest) = extract_front_matter(&lines, &YamlMeta).unwrap();
        assert_eq!(meta["title"], MetaValue::String("x".into()));
        assert_eq!(meta["draft"].as_bool(), Some(true));
        assert_eq!(rest, &["body".to_string()][..]);
    }

    #[test]
    fn leading_blank_lines_are_skipped() {
        let lines = split_lines("\n\n---\ncount: 3\n---\n");
        let (meta, rest) = extract_front_matter(&lines, &YamlMeta).unwrap();
        assert_eq!(meta["count"], MetaValue::Int(3));
        assert!(rest.is_empty());
    }

    #[test]
    fn unclosed_fence_is_not_front_matter() {
        let lines = split_lines("---\ntitle: x\nbody");
        let (meta, rest) = extract_front_matter(&lines, &YamlMeta).unwrap();
        assert!(meta.is_empty());
        assert_eq!(rest.len(), 3);
    }

    #[test]
    fn crlf_fences() {
        let lines = vec!["---\r".to_string(), "a: 1".into(), "---\r".into()];
        let (meta, _) = extract_front_matter(&lines, &YamlMeta).unwrap();
        assert_eq!(meta["a"], MetaValue::Int(1));
    }

    #[test]
    fn empty_front_matter() {
        let lines = split_lines("---\n\n---\ntext");
        let (meta, rest) = extract_front_matter(&lines, &YamlMeta).unwrap();
        assert!(meta.is_empty());
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn nested_values() {
        let lines = split_lines("---\ntags: [a, b]\nauthor:\n  name: Ann\n---");
        let (meta, _) = extract_front_matter(&lines, &YamlMeta).unwrap();
        assert_eq!(
            meta["tags"],
            MetaValue::List(vec![
                MetaValue::String("a".into()),
                MetaValue::String("b".into())
            ])
        );
        let MetaValue::Map(author) = &meta["author"] else {
            panic!("expected map")
        };
        assert_eq!(author["name"].as_str(), Some("Ann"));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let lines = split_lines("---\ntitle: [unclosed\n---\nbody");
        assert!(extract_front_matter(&lines, &YamlMeta).is_err());
    }

    #[test]
    fn non_mapping_yaml_is_an_error() {
        let lines = split_lines("---\n- a\n- b\n---");
        assert!(extract_front_matter(&lines, &YamlMeta).is_err());
    }
}

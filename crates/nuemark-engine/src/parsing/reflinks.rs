//! Reference links: `[label]: target "optional title"`.
//!
//! Definitions are collected while the block parser scans the input and are
//! looked up by label only at render time, so a reference may appear before
//! its definition.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s{0,3}\[([^\[\]]+)\]:\s*(\S.*?)\s*$").expect("reflink definition regex")
});

static TARGET_WITH_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\S+)\s+(?:"([^"]*)"|'([^']*)'|\(([^)]*)\))$"#).expect("link title regex")
});

/// A resolved link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflink {
    pub href: String,
    pub title: Option<String>,
}

/// Splits an optional quoted title off a link target.
///
/// `/about "About us"` becomes `href = "/about"`, `title = "About us"`.
/// Angle brackets around the href are removed.
pub fn parse_link_title(target: &str) -> Reflink {
    let target = target.trim();
    let (href, title) = match TARGET_WITH_TITLE.captures(target) {
        Some(caps) => {
            let href = caps.get(1).map_or("", |m| m.as_str());
            let title = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str().to_string());
            (href, title)
        }
        None => (target, None),
    };

    let href = href
        .strip_prefix('<')
        .and_then(|h| h.strip_suffix('>'))
        .unwrap_or(href);

    Reflink {
        href: href.to_string(),
        title,
    }
}

/// Recognizes a full-line reference definition, returning `(label, link)`.
pub fn parse_definition(line: &str) -> Option<(String, Reflink)> {
    let caps = DEFINITION.captures(line)?;
    let label = caps.get(1)?.as_str().trim();
    let target = caps.get(2)?.as_str();
    Some((label.to_string(), parse_link_title(target)))
}

/// Label → link table. Labels are case-sensitive; the last definition wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reflinks(BTreeMap<String, Reflink>);

impl Reflinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, link: Reflink) {
        let label = label.into();
        if let Some(previous) = self.0.insert(label.clone(), link) {
            log::debug!("reflink `{label}` redefined, replacing {}", previous.href);
        }
    }

    pub fn get(&self, label: &str) -> Option<&Reflink> {
        self.0.get(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Reflink)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// A fresh table with `overrides` (raw `href "title"` strings) laid over
    /// this one. Overrides win.
    pub fn merged_with(&self, overrides: &BTreeMap<String, String>) -> Reflinks {
        let mut merged = self.clone();
        for (label, target) in overrides {
            merged.0.insert(label.clone(), parse_link_title(target));
        }
        merged
    }
}

//! Attribute blocks shared by headings, code fences and tag lines.
//!
//! Grammar: whitespace-separated items `#id`, `.class`, compact chains such as
//! `#id.a.b`, `key="value"`, `key='value'`, `key=value` and bare `key` flags.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"([#.][\w-]+(?:[#.][\w-]+)*)|([\w:@-]+)(?:=(?:"([^"]*)"|'([^']*)'|([^\s"']+)))?"#,
    )
    .expect("attribute item regex")
});

static ATTR_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*(?:(?:[#.][\w-]+)+|[\w:@-]+(?:=(?:"[^"]*"|'[^']*'|[^\s"']+))?)(?:\s+(?:(?:[#.][\w-]+)+|[\w:@-]+(?:=(?:"[^"]*"|'[^']*'|[^\s"']+))?))*\s*$"#,
    )
    .expect("attribute list regex")
});

static TRAILING_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\{([^{}]*)\}\s*$").expect("trailing attr regex"));

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Str(String),
    Flag(bool),
}

impl AttrValue {
    /// Falsy values (`false`, empty string) are never rendered.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Str(s) => !s.is_empty(),
            AttrValue::Flag(b) => *b,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            AttrValue::Flag(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Flag(b)
    }
}

/// Attribute map with deterministic (sorted) iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(BTreeMap<String, AttrValue>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(AttrValue::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.0.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The `id` attribute, if it is a non-empty string.
    pub fn id(&self) -> Option<&str> {
        self.get_str("id").filter(|id| !id.is_empty())
    }

    /// Appends a class, space-joined with any existing classes.
    pub fn add_class(&mut self, class: &str) {
        match self.0.get_mut("class") {
            Some(AttrValue::Str(existing)) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(class);
            }
            _ => self.insert("class", class),
        }
    }

    /// Splits into (`id`/`class` attributes, everything else).
    pub fn partition_html(self) -> (Attrs, Attrs) {
        let (html, data): (BTreeMap<_, _>, BTreeMap<_, _>) = self
            .0
            .into_iter()
            .partition(|(k, _)| k == "id" || k == "class");
        (Attrs(html), Attrs(data))
    }
}

impl<K: Into<String>, V: Into<AttrValue>, const N: usize> From<[(K, V); N]> for Attrs {
    fn from(items: [(K, V); N]) -> Self {
        let mut attrs = Attrs::new();
        for (k, v) in items {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// Parses an attribute list such as `#intro .wide numbered lang="en"`.
pub fn parse_attrs(s: &str) -> Attrs {
    let mut attrs = Attrs::new();

    for caps in ITEM.captures_iter(s) {
        if let Some(shorthand) = caps.get(1) {
            apply_shorthand(&mut attrs, shorthand.as_str());
            continue;
        }
        let Some(key) = caps.get(2) else { continue };
        let value = caps
            .get(3)
            .or_else(|| caps.get(4))
            .or_else(|| caps.get(5))
            .map(|m| AttrValue::from(m.as_str()))
            .unwrap_or(AttrValue::Flag(true));

        match (key.as_str(), &value) {
            ("class", AttrValue::Str(classes)) => {
                for class in classes.split_whitespace() {
                    attrs.add_class(class);
                }
            }
            _ => attrs.insert(key.as_str(), value),
        }
    }
    attrs
}

/// True when every whitespace-separated item of `s` is a valid attribute.
///
/// Empty input is a valid, empty list.
pub fn is_attr_list(s: &str) -> bool {
    s.trim().is_empty() || ATTR_LIST.is_match(s)
}

fn apply_shorthand(attrs: &mut Attrs, chain: &str) {
    let mut rest = chain;
    while let Some(sigil) = rest.chars().next() {
        let body = &rest[1..];
        let end = body.find(['#', '.']).unwrap_or(body.len());
        let name = &body[..end];
        match sigil {
            '#' => attrs.insert("id", name),
            _ => attrs.add_class(name),
        }
        rest = &body[end..];
    }
}

/// Splits a trailing `{...}` attribute block off `text`.
///
/// Returns the text before the block (trimmed) and the block's contents.
pub fn split_trailing_block(text: &str) -> (&str, Option<&str>) {
    match TRAILING_BLOCK.captures(text) {
        Some(caps) => {
            let head = caps.get(1).map_or("", |m| m.as_str());
            let body = caps.get(2).map(|m| m.as_str());
            (head.trim(), body)
        }
        None => (text.trim(), None),
    }
}

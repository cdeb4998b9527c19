//! String-building helpers for HTML output.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::attrs::{AttrValue, Attrs};

/// Void elements: rendered without an end tag or body.
pub const SELF_CLOSING: [&str; 4] = ["img", "source", "meta", "link"];

/// Renders attributes with a leading space each. Falsy values are skipped and
/// `true` renders the bare attribute name.
pub fn render_attrs(attrs: &Attrs) -> String {
    let mut out = String::new();
    for (name, value) in attrs.iter() {
        match value {
            AttrValue::Flag(true) => {
                out.push(' ');
                out.push_str(name);
            }
            AttrValue::Str(s) if !s.is_empty() => {
                let _ = write!(out, " {name}=\"{}\"", encode_double_quoted_attribute(s));
            }
            _ => {}
        }
    }
    out
}

/// `<name attrs>body</name>`, or just `<name attrs>` for void elements.
pub fn elem(name: &str, attrs: &Attrs, body: &str) -> String {
    let mut html = format!("<{name}{}>", render_attrs(attrs));
    if !SELF_CLOSING.contains(&name) {
        html.push_str(body);
        let _ = write!(html, "</{name}>");
    }
    html
}

/// Wraps `html` in `<div class="...">`. An empty class leaves it untouched.
pub fn wrap_class(class: &str, html: &str) -> String {
    if class.is_empty() {
        return html.to_string();
    }
    elem("div", &Attrs::from([("class", class)]), html)
}

pub fn escape(text: &str) -> String {
    encode_text(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn void_elements_have_no_end_tag() {
        let attrs = Attrs::from([("src", "a.png")]);
        assert_eq!(elem("img", &attrs, "ignored"), r#"<img src="a.png">"#);
    }

    #[test]
    fn other_elements_always_close() {
        assert_eq!(elem("p", &Attrs::new(), ""), "<p></p>");
        assert_eq!(elem("div", &Attrs::new(), "x"), "<div>x</div>");
    }

    #[test]
    fn falsy_attributes_are_omitted() {
        let mut attrs = Attrs::new();
        attrs.insert("hidden", false);
        attrs.insert("title", "");
        attrs.insert("open", true);
        attrs.insert("id", "x");
        assert_eq!(elem("details", &attrs, ""), r#"<details id="x" open></details>"#);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let attrs = Attrs::from([("title", r#"a "b" & <c>"#)]);
        assert_eq!(
            render_attrs(&attrs),
            r#" title="a &quot;b&quot; &amp; &lt;c&gt;""#
        );
    }

    #[test]
    fn wrap_with_class() {
        assert_eq!(wrap_class("wide", "<pre></pre>"), r#"<div class="wide"><pre></pre></div>"#);
        assert_eq!(wrap_class("", "<pre></pre>"), "<pre></pre>");
    }
}

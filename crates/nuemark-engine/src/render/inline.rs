use crate::{
    parsing::{attrs::Attrs, inline::Token, reflinks::Reflinks},
    render::html::{elem, escape},
};

/// Renders a token sequence. Reference placeholders resolve against
/// `reflinks`; unresolved ones render their source text.
pub fn render_tokens(tokens: &[Token], reflinks: &Reflinks) -> String {
    let mut out = String::new();
    for token in tokens {
        render_token(token, reflinks, &mut out);
    }
    out
}

fn render_token(token: &Token, reflinks: &Reflinks, out: &mut String) {
    let html = match token {
        Token::Text(text) => escape(text),
        Token::Code(code) => elem("code", &Attrs::new(), &escape(code)),
        Token::Em(children) => elem("em", &Attrs::new(), &render_tokens(children, reflinks)),
        Token::Strong(children) => {
            elem("strong", &Attrs::new(), &render_tokens(children, reflinks))
        }
        Token::Link { label, href, title } => anchor(label, href, title.as_deref(), reflinks),
        Token::Image { alt, src, title } => {
            let mut attrs = Attrs::from([("src", src.as_str()), ("alt", alt.as_str())]);
            if let Some(title) = title {
                attrs.insert("title", title.as_str());
            }
            elem("img", &attrs, "")
        }
        Token::RefLink { label, key, raw } => match reflinks.get(key) {
            Some(link) => anchor(label, &link.href, link.title.as_deref(), reflinks),
            None => {
                log::debug!("unresolved reference `{key}`");
                escape(raw)
            }
        },
    };
    out.push_str(&html);
}

fn anchor(label: &[Token], href: &str, title: Option<&str>, reflinks: &Reflinks) -> String {
    let mut attrs = Attrs::from([("href", href)]);
    if let Some(title) = title {
        attrs.insert("title", title);
    }
    elem("a", &attrs, &render_tokens(label, reflinks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{inline::tokenize, reflinks::parse_link_title};
    use pretty_assertions::assert_eq;

    fn render(src: &str, reflinks: &Reflinks) -> String {
        render_tokens(&tokenize(src), reflinks)
    }

    #[test]
    fn formatting() {
        assert_eq!(
            render("a **b** *c* `<d>`", &Reflinks::new()),
            "a <strong>b</strong> <em>c</em> <code>&lt;d&gt;</code>"
        );
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(render("1 < 2 & 3", &Reflinks::new()), "1 &lt; 2 &amp; 3");
    }

    #[test]
    fn link_with_title() {
        assert_eq!(
            render(r#"[Nue](https://nuejs.org "Home")"#, &Reflinks::new()),
            r#"<a href="https://nuejs.org" title="Home">Nue</a>"#
        );
    }

    #[test]
    fn image() {
        assert_eq!(
            render("![logo](/logo.png)", &Reflinks::new()),
            r#"<img alt="logo" src="/logo.png">"#
        );
    }

    #[test]
    fn resolved_reference() {
        let mut reflinks = Reflinks::new();
        reflinks.insert("bar", parse_link_title(r#"/something "subject""#));
        assert_eq!(
            render("[Third][bar]", &reflinks),
            r#"<a href="/something" title="subject">Third</a>"#
        );
    }

    #[test]
    fn unresolved_reference_renders_source() {
        assert_eq!(render("see [missing] & [x][y]", &Reflinks::new()), "see [missing] &amp; [x][y]");
    }
}

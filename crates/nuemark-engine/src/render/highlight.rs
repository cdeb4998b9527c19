use crate::{
    error::BoxError,
    parsing::attrs::Attrs,
    render::html::{elem, escape},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightOptions<'a> {
    /// Fence language name; may be empty.
    pub language: &'a str,
    pub numbered: bool,
}

/// Turns raw code into HTML placed inside the `<pre>` element.
pub trait Highlighter {
    fn highlight(&self, code: &str, options: &HighlightOptions<'_>) -> Result<String, BoxError>;
}

/// Escapes the code without colouring it. Numbered output wraps each line in
/// `<span class="line">`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, options: &HighlightOptions<'_>) -> Result<String, BoxError> {
        let body = if options.numbered {
            let line = Attrs::from([("class", "line")]);
            code.split('\n')
                .map(|l| elem("span", &line, &escape(l)))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            escape(code)
        };
        let attrs = Attrs::from([("language", options.language)]);
        Ok(elem("code", &attrs, &body))
    }
}

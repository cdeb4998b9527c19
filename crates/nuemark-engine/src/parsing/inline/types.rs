/// A parsed inline token.
///
/// Tokens own their text; reference placeholders stay unresolved until render
/// time so that definitions appearing later in the document still apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Plain text, unescaped.
    Text(String),
    /// A code span. Raw zone: its content is never tokenized.
    Code(String),
    /// `*text*` or `_text_`.
    Em(Vec<Token>),
    /// `**text**` or `__text__`.
    Strong(Vec<Token>),
    /// `[label](href "title")`.
    Link {
        label: Vec<Token>,
        href: String,
        title: Option<String>,
    },
    /// `![alt](src "title")`.
    Image {
        alt: String,
        src: String,
        title: Option<String>,
    },
    /// `[label][key]`, `[label][]` or shorthand `[key]`.
    RefLink {
        label: Vec<Token>,
        /// Reflink table key (case-sensitive).
        key: String,
        /// Source text, rendered verbatim when the key is unresolved.
        raw: String,
    },
}

impl Token {
    /// Concatenated plain text of this token and its children.
    pub fn plain_text(&self) -> String {
        match self {
            Token::Text(s) | Token::Code(s) => s.clone(),
            Token::Em(children) | Token::Strong(children) => plain_text(children),
            Token::Link { label, .. } | Token::RefLink { label, .. } => plain_text(label),
            Token::Image { alt, .. } => alt.clone(),
        }
    }
}

/// Concatenated plain text of a token sequence.
pub fn plain_text(tokens: &[Token]) -> String {
    tokens.iter().map(Token::plain_text).collect()
}

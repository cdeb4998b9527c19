/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters: they are the default block when no other
/// classifier rule matches. Lines are stored trimmed and tokenized at render
/// time.
pub struct Paragraph;

impl Paragraph {
    pub fn line(raw: &str) -> String {
        raw.trim().to_string()
    }
}

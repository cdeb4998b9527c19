/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Strips one leading and one trailing space when both are present,
    /// so `` ` `x` ` `` can contain backticks next to the delimiters.
    pub fn normalize(inner: &str) -> &str {
        match inner.strip_prefix(' ').and_then(|s| s.strip_suffix(' ')) {
            Some(stripped) if !stripped.trim().is_empty() => stripped,
            _ => inner,
        }
    }
}

/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one quote level: up to three spaces, `>`, one optional space.
    ///
    /// Nested markers (`> > x`, `>> x`) are left in the remainder and picked
    /// up when the quote body is parsed recursively.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let trimmed = line.trim_start_matches(' ');
        if line.len() - trimmed.len() > 3 {
            return None;
        }
        let rest = trimmed.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}

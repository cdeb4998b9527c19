/// A list item marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub numbered: bool,
    /// Leading whitespace before the marker.
    pub indent: usize,
    /// Byte offset where the item content starts. Continuation lines are
    /// dedented by up to this many characters.
    pub width: usize,
}

pub struct ListItem;

impl ListItem {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    pub const ORDERED_DELIMITERS: [char; 2] = ['.', ')'];
    /// Longest accepted ordinal, per CommonMark.
    pub const MAX_DIGITS: usize = 9;

    pub fn marker(line: &str) -> Option<ListMarker> {
        let t = line.trim_start_matches([' ', '\t']);
        let indent = line.len() - t.len();

        let (numbered, marker_len) = match t.chars().next()? {
            c if Self::BULLETS.contains(&c) => (false, 1),
            c if c.is_ascii_digit() => {
                let digits = t.chars().take_while(char::is_ascii_digit).count();
                let delimiter = t[digits..].chars().next()?;
                if digits > Self::MAX_DIGITS || !Self::ORDERED_DELIMITERS.contains(&delimiter) {
                    return None;
                }
                (true, digits + 1)
            }
            _ => return None,
        };

        let after = &t[marker_len..];
        let width = match after.chars().next() {
            None => indent + marker_len,
            Some(' ' | '\t') => indent + marker_len + 1,
            Some(_) => return None,
        };
        Some(ListMarker {
            numbered,
            indent,
            width,
        })
    }

    /// The item's first-line content after the marker.
    pub fn content(line: &str, marker: ListMarker) -> &str {
        line.get(marker.width..).unwrap_or("").trim()
    }
}

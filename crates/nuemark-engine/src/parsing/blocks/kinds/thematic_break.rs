/// Horizontal rule: three or more `-`, `*` or `_`, optionally spaced.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_RUN: usize = 3;

    pub fn matches(line: &str) -> bool {
        if line.len() - line.trim_start().len() > 3 {
            return false;
        }
        let t = line.trim();
        let Some(marker) = t.chars().next().filter(|c| Self::MARKERS.contains(c)) else {
            return false;
        };
        let mut count = 0;
        for c in t.chars() {
            match c {
                ' ' | '\t' => {}
                c if c == marker => count += 1,
                _ => return false,
            }
        }
        count >= Self::MIN_RUN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("---", true)]
    #[case("***", true)]
    #[case("___", true)]
    #[case("- - -", true)]
    #[case("  *****  ", true)]
    #[case("--", false)]
    #[case("-*-", false)]
    #[case("- item", false)]
    fn recognizes_breaks(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(ThematicBreak::matches(line), expected);
    }
}

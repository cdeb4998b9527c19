/// Pipe table syntax: a header row, a separator row, then body rows.
pub struct TableSyntax;

impl TableSyntax {
    pub const PIPE: char = '|';

    /// A row is any non-blank line containing a pipe.
    pub fn is_row(line: &str) -> bool {
        !line.trim().is_empty() && line.contains(Self::PIPE)
    }

    /// `| --- | :-: |` style separator. Requires at least one pipe.
    pub fn is_separator(line: &str) -> bool {
        if !line.contains(Self::PIPE) {
            return false;
        }
        let cells = Self::split_cells(line);
        !cells.is_empty()
            && cells.iter().all(|cell| {
                let dashes = cell.trim_start_matches(':').trim_end_matches(':');
                !dashes.is_empty() && dashes.chars().all(|c| c == '-')
            })
    }

    /// Splits a row into trimmed cells. Outer pipes are optional; `\|` is a
    /// literal pipe inside a cell.
    pub fn split_cells(line: &str) -> Vec<String> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = match t.strip_suffix(Self::PIPE) {
            Some(stripped) if !stripped.ends_with('\\') => stripped,
            _ => t,
        };

        let mut cells = vec![];
        let mut cell = String::new();
        let mut chars = t.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\\' if chars.peek() == Some(&Self::PIPE) => {
                    cell.push(Self::PIPE);
                    chars.next();
                }
                Self::PIPE => cells.push(std::mem::take(&mut cell).trim().to_string()),
                c => cell.push(c),
            }
        }
        cells.push(cell.trim().to_string());
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("| --- | --- |", true)]
    #[case("---|:---:", true)]
    #[case("|:--|", true)]
    #[case("---", false)]
    #[case("| a | --- |", false)]
    #[case("| |", false)]
    fn recognizes_separator(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(TableSyntax::is_separator(line), expected);
    }

    #[test]
    fn splits_cells() {
        assert_eq!(TableSyntax::split_cells("| a | b |"), vec!["a", "b"]);
        assert_eq!(TableSyntax::split_cells("a|b"), vec!["a", "b"]);
        assert_eq!(TableSyntax::split_cells(r"| a \| b | c |"), vec!["a | b", "c"]);
    }
}

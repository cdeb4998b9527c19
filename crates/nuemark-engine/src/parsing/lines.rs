//! Line splitting and indentation helpers shared by the block parser and
//! front matter extraction.

/// Splits source text into lines without terminators. A trailing `\r` is
/// dropped from each line so CRLF input parses like LF input.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Count of leading spaces and tabs.
pub fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

/// Removes up to `n` leading whitespace characters from `line`.
pub fn dedent_line(line: &str, n: usize) -> &str {
    let strip = indent_of(line).min(n);
    &line[strip..]
}

/// Dedents every line by `n`; blank lines become empty.
pub fn dedent(lines: &[String], n: usize) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            if is_blank(line) {
                String::new()
            } else {
                dedent_line(line, n).to_string()
            }
        })
        .collect()
}

/// Smallest indentation among the non-blank lines.
pub fn common_indent(lines: &[String]) -> usize {
    lines
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| indent_of(line))
        .min()
        .unwrap_or(0)
}

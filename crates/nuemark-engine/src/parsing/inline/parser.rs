use crate::parsing::reflinks::parse_link_title;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link},
    types::{Token, plain_text},
};

/// Constructs tried at each position, in precedence order.
/// Code spans come first: they are raw zones.
const CONSTRUCTS: [fn(&mut Cursor<'_>) -> Option<Token>; 4] = [
    try_parse_code_span,
    try_parse_image,
    try_parse_link,
    try_parse_emphasis,
];

/// Tokenizes one line of inline content into a sequence of [`Token`]s.
///
/// Text between special constructs is emitted as `Token::Text`. Adjacent text
/// is merged, so a line without markup yields a single text token.
/// On failure every `try_parse_*` helper leaves the cursor untouched.
pub fn tokenize(s: &str) -> Vec<Token> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text = String::new();

    fn flush_text(out: &mut Vec<Token>, text: &mut String) {
        if !text.is_empty() {
            out.push(Token::Text(std::mem::take(text)));
        }
    }

    while !cur.eof() {
        if let Some(c) = try_parse_escape(&mut cur) {
            text.push(c);
            continue;
        }
        if let Some(token) = CONSTRUCTS.iter().find_map(|parse| parse(&mut cur)) {
            match token {
                Token::Text(s) => text.push_str(&s),
                token => {
                    flush_text(&mut out, &mut text);
                    out.push(token);
                }
            }
            continue;
        }
        if let Some(c) = cur.bump_char() {
            text.push(c);
        }
    }

    flush_text(&mut out, &mut text);
    out
}

/// `\*` and friends: a backslash before ASCII punctuation yields the literal.
fn try_parse_escape(cur: &mut Cursor<'_>) -> Option<char> {
    if cur.peek() != Some(Link::ESCAPE) {
        return None;
    }
    let next = cur.peek_at(1).filter(u8::is_ascii_punctuation)?;
    cur.bump_n(2);
    Some(next as char)
}

/// Parses a code span delimited by a backtick run of equal length.
///
/// An unclosed run is consumed as literal text so its ticks cannot open
/// a shorter span later on.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<Token> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let n = cur.run_len(CodeSpan::TICK);
    let rest = cur.rest();
    match find_closing_ticks(rest.as_bytes(), n) {
        Some(close) => {
            let inner = &rest[n..close];
            cur.bump_n(close + n);
            Some(Token::Code(CodeSpan::normalize(inner).to_string()))
        }
        None => {
            cur.bump_n(n);
            Some(Token::Text(rest[..n].to_string()))
        }
    }
}

/// Finds the start of a closing run of exactly `n` ticks after the opening run.
fn find_closing_ticks(bytes: &[u8], n: usize) -> Option<usize> {
    let mut i = n;
    while i < bytes.len() {
        if bytes[i] != CodeSpan::TICK {
            i += 1;
            continue;
        }
        let run = bytes[i..].iter().take_while(|&&b| b == CodeSpan::TICK).count();
        if run == n {
            return Some(i);
        }
        i += run;
    }
    None
}

/// Returns the index of the delimiter matching the `open` byte at `s[0]`.
/// Delimiters inside code spans do not count.
fn matching_close(s: &str, open: u8, close: u8) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == Link::ESCAPE {
            i += 2;
            continue;
        }
        if b == CodeSpan::TICK {
            let run = bytes[i..].iter().take_while(|&&b| b == CodeSpan::TICK).count();
            i += find_closing_ticks(&bytes[i..], run).map_or(run, |c| c + run);
            continue;
        }
        if b == open {
            depth += 1;
        } else if b == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(i);
            }
        }
        i += 1;
    }
    None
}

/// Parses `![alt](src "title")`.
fn try_parse_image(cur: &mut Cursor<'_>) -> Option<Token> {
    if !cur.starts_with(Link::IMAGE) {
        return None;
    }

    let bracket = &cur.rest()[1..];
    let close = matching_close(bracket, Link::OPEN, Link::CLOSE)?;
    let after = &bracket[close + 1..];
    if after.as_bytes().first() != Some(&Link::TARGET_OPEN) {
        return None;
    }
    let target_close = matching_close(after, Link::TARGET_OPEN, Link::TARGET_CLOSE)?;

    let alt = plain_text(&tokenize(&bracket[1..close]));
    let target = parse_link_title(&after[1..target_close]);
    cur.bump_n(1 + close + 1 + target_close + 1);

    Some(Token::Image {
        alt,
        src: target.href,
        title: target.title,
    })
}

/// Parses explicit links and reference placeholders.
///
/// - `[label](href "title")` → `Link`
/// - `[label][key]` → `RefLink` with `key`
/// - `[label][]` and `[label]` → `RefLink` keyed by the label itself
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<Token> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let rest = cur.rest();
    let close = matching_close(rest, Link::OPEN, Link::CLOSE)?;
    let label_src = &rest[1..close];
    if label_src.trim().is_empty() {
        return None;
    }
    let after = &rest[close + 1..];

    match after.as_bytes().first().copied() {
        Some(Link::TARGET_OPEN) => {
            if let Some(target_close) = matching_close(after, Link::TARGET_OPEN, Link::TARGET_CLOSE)
            {
                let target = parse_link_title(&after[1..target_close]);
                cur.bump_n(close + 1 + target_close + 1);
                return Some(Token::Link {
                    label: tokenize(label_src),
                    href: target.href,
                    title: target.title,
                });
            }
        }
        Some(Link::OPEN) => {
            if let Some(key_close) = after.find(Link::CLOSE as char) {
                let key = after[1..key_close].trim();
                let key = if key.is_empty() { label_src.trim() } else { key };
                let len = close + 1 + key_close + 1;
                let token = Token::RefLink {
                    label: tokenize(label_src),
                    key: key.to_string(),
                    raw: rest[..len].to_string(),
                };
                cur.bump_n(len);
                return Some(token);
            }
        }
        _ => {}
    }

    let len = close + 1;
    let token = Token::RefLink {
        label: tokenize(label_src),
        key: label_src.trim().to_string(),
        raw: rest[..len].to_string(),
    };
    cur.bump_n(len);
    Some(token)
}

/// Parses `***both***`, `**strong**`, `*em*` and their underscore forms,
/// longest run first.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<Token> {
    let b = cur.peek()?;
    if b != Emphasis::STAR && b != Emphasis::UNDERSCORE {
        return None;
    }

    for delim in Emphasis::DELIMITERS {
        if delim[0] != b || !cur.starts_with(delim) {
            continue;
        }
        if let Some(token) = try_delimited(cur, delim) {
            return Some(token);
        }
    }
    None
}

fn try_delimited(cur: &mut Cursor<'_>, delim: &[u8]) -> Option<Token> {
    let n = delim.len();
    let rest = cur.rest();
    let word_bound = Emphasis::is_intraword_sensitive(delim);

    let first = rest[n..].chars().next()?;
    if first.is_whitespace() || first as u32 == delim[0] as u32 {
        return None;
    }
    if word_bound && cur.prev_char().is_some_and(char::is_alphanumeric) {
        return None;
    }

    let bytes = rest.as_bytes();
    let mut i = n;
    while i < bytes.len() {
        match bytes[i] {
            Link::ESCAPE => {
                i += 2;
                continue;
            }
            CodeSpan::TICK => {
                let run = bytes[i..].iter().take_while(|&&b| b == CodeSpan::TICK).count();
                i += find_closing_ticks(&bytes[i..], run).map_or(run, |c| c + run);
                continue;
            }
            b if b == delim[0] => {}
            _ => {
                i += 1;
                continue;
            }
        }

        let run = bytes[i..].iter().take_while(|&&b| b == delim[0]).count();
        // A doubled run inside single emphasis belongs to a nested strong span.
        if run < n || (n == 1 && run == 2) {
            i += run;
            continue;
        }
        let close = i + run - n;
        let inner = &rest[n..close];
        let before_ok = inner.chars().next_back().is_some_and(|c| !c.is_whitespace());
        let after_ok = !word_bound
            || rest[close + n..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_alphanumeric());
        if !before_ok || !after_ok {
            i += run;
            continue;
        }

        let children = tokenize(inner);
        cur.bump_n(close + n);
        return Some(match n {
            3 => Token::Em(vec![Token::Strong(children)]),
            2 => Token::Strong(children),
            _ => Token::Em(children),
        });
    }
    None
}

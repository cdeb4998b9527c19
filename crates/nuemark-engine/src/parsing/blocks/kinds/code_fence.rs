use crate::parsing::{
    attrs::{Attrs, parse_attrs},
    blocks::types::CodeData,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// An opening fence: its character, run length and info string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    pub len: usize,
    pub info: String,
}

/// Parsed info string: language name, attributes, render data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceInfo {
    pub name: String,
    pub attr: Attrs,
    pub data: CodeData,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: char = '`';
    pub const TILDE: char = '~';
    pub const MIN_LEN: usize = 3;
    /// Info-string flag that moves into [`CodeData::numbered`].
    pub const NUMBERED: &'static str = "numbered";

    pub fn sig(line: &str) -> Option<FenceSig> {
        let t = line.trim_start_matches(' ');
        if line.len() - t.len() > 3 {
            return None;
        }
        let (kind, ch) = match t.chars().next()? {
            Self::BACKTICK => (FenceKind::Backticks, Self::BACKTICK),
            Self::TILDE => (FenceKind::Tildes, Self::TILDE),
            _ => return None,
        };
        let len = t.chars().take_while(|&c| c == ch).count();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = t[len..].trim();
        // A backtick info string may not contain backticks (`` ```x``` `` is inline code).
        if kind == FenceKind::Backticks && info.contains(Self::BACKTICK) {
            return None;
        }
        Some(FenceSig {
            kind,
            len,
            info: info.to_string(),
        })
    }

    /// A closing fence uses the same character, is at least as long as the
    /// opener and carries no info string.
    pub fn closes(open: &FenceSig, line: &str) -> bool {
        match Self::sig(line) {
            Some(sig) => sig.kind == open.kind && sig.len >= open.len && sig.info.is_empty(),
            None => false,
        }
    }

    /// Parses `js {.wide numbered}` style info strings. Braces are optional.
    pub fn info(info: &str) -> FenceInfo {
        let info = info.trim();
        let (name, rest) = match info.split_once(char::is_whitespace) {
            _ if info.starts_with(['{', '.', '#']) => ("", info),
            Some((name, rest)) => (name, rest),
            None => (info, ""),
        };
        let rest = rest.trim();
        let rest = rest
            .strip_prefix('{')
            .and_then(|r| r.strip_suffix('}'))
            .unwrap_or(rest);

        let mut attr = parse_attrs(rest);
        let numbered = attr
            .remove(Self::NUMBERED)
            .is_some_and(|v| v.is_truthy());

        FenceInfo {
            name: name.to_string(),
            attr,
            data: CodeData { numbered },
        }
    }
}

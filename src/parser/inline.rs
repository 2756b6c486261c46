//! Inline span detection: bold via regex, italics via a small scanner.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static BOLD_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

/// A piece of a bold-free gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Inline<'a> {
    Text(&'a str),
    Italic(&'a str),
}

/// Bold matches in `block`, left to right and non-overlapping: each yields
/// the byte range of the whole match and the text between the delimiters.
pub(crate) fn bold_spans(block: &str) -> impl Iterator<Item = (Range<usize>, &str)> {
    BOLD_SPAN.captures_iter(block).filter_map(|caps| {
        let whole = caps.get(0)?;
        let inner = caps.get(1)?;
        Some((whole.range(), inner.as_str()))
    })
}

/// Split `piece` into plain text and `*italic*` / `_italic_` spans.
///
/// Delimiters that do not form a valid pair stay in the text.
pub(crate) fn split_italic(piece: &str) -> Vec<Inline<'_>> {
    let bytes = piece.as_bytes();
    let mut out = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if matches!(bytes[i], b'*' | b'_') && opens_at(piece, i) {
            if let Some(close) = closing_delimiter(piece, i) {
                if text_start < i {
                    out.push(Inline::Text(&piece[text_start..i]));
                }
                out.push(Inline::Italic(&piece[i + 1..close]));
                i = close + 1;
                text_start = i;
                continue;
            }
        }
        i += 1;
    }

    if text_start < piece.len() {
        out.push(Inline::Text(&piece[text_start..]));
    }
    out
}

fn opens_at(piece: &str, at: usize) -> bool {
    let delim = piece.as_bytes()[at] as char;
    let prev = piece[..at].chars().next_back();
    let Some(next) = piece[at + 1..].chars().next() else {
        return false;
    };

    if next.is_whitespace() || next == delim || prev == Some(delim) {
        return false;
    }
    // `_` inside a word (snake_case) is not emphasis
    !(delim == '_' && prev.is_some_and(char::is_alphanumeric))
}

fn closing_delimiter(piece: &str, open: usize) -> Option<usize> {
    let delim = piece.as_bytes()[open] as char;
    let close = open + 1 + piece[open + 1..].find([delim, '\n'])?;
    if piece.as_bytes()[close] == b'\n' {
        return None;
    }

    let prev = piece[..close].chars().next_back()?;
    let next = piece[close + 1..].chars().next();
    if prev.is_whitespace() || next == Some(delim) {
        return None;
    }
    if delim == '_' && next.is_some_and(char::is_alphanumeric) {
        return None;
    }
    Some(close)
}

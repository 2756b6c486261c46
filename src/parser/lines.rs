//! Line classification for numbered and bullet list items.

use regex::Regex;
use std::sync::LazyLock;

static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.\s+(.*)$").unwrap());

static BULLET_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[•\-\*]\s+(.*)$").unwrap());

/// A list line with its marker removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListLine<'a> {
    Numbered { number: u64, content: &'a str },
    Bullet { content: &'a str },
}

/// Classify one line (without its terminator).
///
/// Returns `None` for plain lines. A numbered line whose index does not fit
/// in a `u64` is plain.
pub(crate) fn classify_line(line: &str) -> Option<ListLine<'_>> {
    if let Some(caps) = NUMBERED_LINE.captures(line) {
        let digits = &caps[1];
        let content = caps.get(2).map_or("", |m| m.as_str());
        match digits.parse::<u64>() {
            Ok(number) => return Some(ListLine::Numbered { number, content }),
            Err(e) => {
                tracing::debug!("Treating numbered line as text ({}): {:?}", e, digits);
                return None;
            }
        }
    }

    BULLET_LINE.captures(line).map(|caps| ListLine::Bullet {
        content: caps.get(1).map_or("", |m| m.as_str()),
    })
}

/// Split a line from `split_inclusive('\n')` into body and terminator.
pub(crate) fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_line() {
        assert_eq!(
            classify_line("  12.  Twelfth item"),
            Some(ListLine::Numbered {
                number: 12,
                content: "Twelfth item"
            })
        );
    }

    #[test]
    fn test_numbered_marker_only() {
        assert_eq!(
            classify_line("1. "),
            Some(ListLine::Numbered {
                number: 1,
                content: ""
            })
        );
    }

    #[test]
    fn test_number_without_space_is_plain() {
        assert_eq!(classify_line("3.14 is pi"), None);
        assert_eq!(classify_line("1."), None);
    }

    #[test]
    fn test_bullet_markers() {
        for line in ["- item", "* item", "• item", "   -\titem"] {
            assert_eq!(
                classify_line(line),
                Some(ListLine::Bullet { content: "item" }),
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_bold_at_line_start_is_not_bullet() {
        assert_eq!(classify_line("**Acme** is great"), None);
    }

    #[test]
    fn test_overflowing_number_is_plain() {
        assert_eq!(classify_line("99999999999999999999999. big"), None);
    }

    #[test]
    fn test_split_terminator() {
        assert_eq!(split_terminator("a\r\n"), ("a", "\r\n"));
        assert_eq!(split_terminator("a\n"), ("a", "\n"));
        assert_eq!(split_terminator("a"), ("a", ""));
    }
}

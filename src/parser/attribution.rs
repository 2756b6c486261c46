//! Database attribution markers and business-name resolution.

/// Lower-case words allowed inside a multi-word business name.
const CONNECTORS: &[&str] = &["of", "and", "the", "&", "for", "de", "at", "on"];

/// Punctuation that ends a clause; a word carrying it cannot start a name.
const CLAUSE_END: &[char] = &['.', ',', ':', ';', '!', '?'];

/// Configured markers, pre-lowered for ASCII-case-insensitive search.
#[derive(Debug, Clone, Default)]
pub(crate) struct MarkerSet {
    lowered: Vec<String>,
}

impl MarkerSet {
    pub(crate) fn new(markers: &[String]) -> Self {
        Self {
            lowered: markers
                .iter()
                .filter(|m| !m.is_empty())
                .map(|m| m.to_ascii_lowercase())
                .collect(),
        }
    }

    /// Earliest marker occurrence at or after `from` in an ASCII-lowered
    /// haystack. Ties go to the longer marker.
    ///
    /// ASCII lowering keeps byte offsets, so the returned range is valid in
    /// the original text as well.
    pub(crate) fn find(&self, lowered_haystack: &str, from: usize) -> Option<(usize, usize)> {
        let tail = lowered_haystack.get(from..)?;
        self.lowered
            .iter()
            .filter_map(|m| tail.find(m.as_str()).map(|at| (from + at, from + at + m.len())))
            .min_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))
    }
}

/// Name carried by an emphasised span directly before a marker.
pub(crate) fn name_from_span(content: &str) -> Option<String> {
    let name = content.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Name at the very end of plain text directly before a marker: a trailing
/// quoted span, or else a trailing run of capitalised words.
pub(crate) fn name_from_text(text: &str) -> Option<String> {
    if text.ends_with(char::is_whitespace) {
        return None;
    }
    let line = text.rsplit('\n').next().unwrap_or(text);
    quoted_tail(line).or_else(|| capitalized_tail(line))
}

fn quoted_tail(line: &str) -> Option<String> {
    let inner = line
        .strip_suffix('"')
        .or_else(|| line.strip_suffix('\u{201d}'))?;
    let (open, quote) = inner
        .char_indices()
        .rev()
        .find(|(_, c)| *c == '"' || *c == '\u{201c}')?;
    name_from_span(&inner[open + quote.len_utf8()..])
}

/// Name for a marker after an emphasised span and a short plain tail, as in
/// `**Acme** Plumbing`. The span joins the name only when every word of the
/// tail belongs to the capitalised run.
pub(crate) fn name_after_span(span: &str, text: &str) -> Option<String> {
    if text.contains('\n') || text.ends_with(char::is_whitespace) {
        return None;
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() || run_start(&words) != 0 {
        return None;
    }

    let glue = if text.starts_with(char::is_whitespace) { " " } else { "" };
    let joined = words.join(" ");
    name_from_span(&format!(
        "{}{}{}",
        span.trim(),
        glue,
        joined.trim_end_matches(CLAUSE_END)
    ))
}

/// Index of the first word of the trailing capitalised run, connectors
/// included; `words.len()` when there is none.
fn run_start(words: &[&str]) -> usize {
    let mut start = words.len();
    for (idx, word) in words.iter().enumerate().rev() {
        let rightmost = idx + 1 == words.len();
        if !rightmost && word.ends_with(CLAUSE_END) {
            break;
        }
        if is_capitalized(word) || (start < words.len() && CONNECTORS.contains(word)) {
            start = idx;
        } else {
            break;
        }
    }
    start
}

fn capitalized_tail(line: &str) -> Option<String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let mut start = run_start(&words);
    while start < words.len() && CONNECTORS.contains(&words[start]) {
        start += 1;
    }
    if start == words.len() {
        return None;
    }

    let joined = words[start..].join(" ");
    let name = joined
        .trim_end_matches(CLAUSE_END)
        .trim_start_matches(['(', '"', '\'', '\u{201c}']);
    name_from_span(name)
}

fn is_capitalized(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| c.is_uppercase() || c.is_ascii_digit())
}

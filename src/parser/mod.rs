//! Message formatter for AI chat-completion text.
//!
//! Turns the markdown-like dialect the chat model is prompted to use into a
//! [`ParsedMessage`].
//!
//! ## Dialect
//!
//! | Construct | Pattern | Segment |
//! |---|---|---|
//! | Bold | `**text**` (no `*` inside) | `Bold` |
//! | Italic | `*text*` or `_text_` | `Italic` |
//! | Numbered line | `1. item` | `NumberedList { number }` |
//! | Bullet line | `- item`, `* item`, `• item` | `Bullet` |
//! | Attribution | `(from our database)` | `DatabaseIndicator { businessName }` |
//!
//! Lines are classified before any span is matched. Inline formatting inside
//! a list line is flattened into the item's content, and attribution markers
//! found there become indicators emitted right after the item.

mod attribution;
mod inline;
mod lines;

use crate::error::Result;
use crate::options::FormatterOptions;
use crate::types::{MessageSegment, ParsedMessage, SegmentType};

use attribution::MarkerSet;
use inline::Inline;
use lines::ListLine;

/// Parser for assistant messages.
///
/// Holds configuration only: every call to [`parse`](Self::parse) is
/// independent, and the formatter can be shared between threads.
#[derive(Debug, Clone)]
pub struct MessageFormatter {
    options: FormatterOptions,
    markers: MarkerSet,
}

impl MessageFormatter {
    /// Create a formatter with validated options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`](crate::error::Error::InvalidOptions)
    /// if the options fail [`FormatterOptions::validate`].
    pub fn new(options: FormatterOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::from_valid(options))
    }

    fn from_valid(options: FormatterOptions) -> Self {
        let markers = MarkerSet::new(&options.database_markers);
        Self { options, markers }
    }

    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    /// Parse one message. Never fails: anything that is not recognised ends
    /// up in a `Text` segment with its original characters.
    pub fn parse(&self, text: &str) -> ParsedMessage {
        let mut sink = SegmentSink::default();
        let mut block = String::new();

        for raw in text.split_inclusive('\n') {
            let (body, terminator) = lines::split_terminator(raw);
            let list_line = if self.options.lists {
                lines::classify_line(body)
            } else {
                None
            };

            match list_line {
                Some(item) => {
                    self.scan_block(&block, &mut sink);
                    block.clear();
                    self.push_list_item(item, &mut sink);
                    block.push_str(terminator);
                }
                None => block.push_str(raw),
            }
        }
        self.scan_block(&block, &mut sink);

        let segments = sink.finish();
        tracing::trace!(
            "Parsed {} bytes into {} segments",
            text.len(),
            segments.len()
        );
        ParsedMessage::new(segments)
    }

    /// Span pass over a run of non-list lines.
    fn scan_block(&self, block: &str, sink: &mut SegmentSink) {
        let mut last = 0;
        for (range, inner) in inline::bold_spans(block) {
            self.scan_gap(&block[last..range.start], sink);
            sink.push(MessageSegment::bold(inner));
            last = range.end;
        }
        self.scan_gap(&block[last..], sink);
    }

    /// Text between bold spans: attribution markers, then italics.
    fn scan_gap(&self, gap: &str, sink: &mut SegmentSink) {
        if gap.is_empty() {
            return;
        }
        if gap.contains("**") {
            tracing::debug!("Unmatched bold delimiter kept as text ({} bytes)", gap.len());
        }
        if !self.options.database_indicators {
            self.scan_italic(gap, sink);
            return;
        }

        let lowered = gap.to_ascii_lowercase();
        let mut pos = 0;
        while let Some((start, end)) = self.markers.find(&lowered, pos) {
            self.scan_italic(&gap[pos..start], sink);
            sink.push_indicator();
            pos = end;
        }
        self.scan_italic(&gap[pos..], sink);
    }

    fn scan_italic(&self, piece: &str, sink: &mut SegmentSink) {
        if !self.options.italic {
            sink.push_text(piece);
            return;
        }
        for span in inline::split_italic(piece) {
            match span {
                Inline::Text(text) => sink.push_text(text),
                Inline::Italic(text) => sink.push(MessageSegment::italic(text)),
            }
        }
    }

    /// Emit a list item with flattened content, followed by any indicators
    /// its line carried.
    fn push_list_item(&self, item: ListLine<'_>, sink: &mut SegmentSink) {
        let content = match item {
            ListLine::Numbered { content, .. } | ListLine::Bullet { content } => content,
        };

        let mut inner = SegmentSink::default();
        self.scan_block(content, &mut inner);

        let mut flat = String::new();
        let mut indicators = Vec::new();
        for segment in inner.finish() {
            match segment.segment_type() {
                SegmentType::DatabaseIndicator => indicators.push(segment),
                _ => flat.push_str(segment.content()),
            }
        }

        sink.push(match item {
            ListLine::Numbered { number, .. } => MessageSegment::numbered(number, flat),
            ListLine::Bullet { .. } => MessageSegment::bullet(flat),
        });
        for indicator in indicators {
            sink.push(indicator);
        }
    }
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::from_valid(FormatterOptions::default())
    }
}

/// Output collector that merges adjacent text and never emits empty text.
#[derive(Debug, Default)]
struct SegmentSink {
    segments: Vec<MessageSegment>,
    pending: String,
}

impl SegmentSink {
    fn push_text(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn flush_text(&mut self) {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            self.segments.push(MessageSegment::text(text));
        }
    }

    fn push(&mut self, segment: MessageSegment) {
        self.flush_text();
        self.segments.push(segment);
    }

    /// Emit a database indicator for whatever directly precedes it.
    ///
    /// Spaces and tabs between the name and the marker are dropped.
    fn push_indicator(&mut self) {
        let kept = self.pending.trim_end_matches([' ', '\t']).len();
        self.pending.truncate(kept);

        let span = self
            .segments
            .last()
            .filter(|prev| matches!(prev.segment_type(), SegmentType::Bold | SegmentType::Italic))
            .map(MessageSegment::content);
        let name = match span {
            Some(span) if self.pending.is_empty() => attribution::name_from_span(span),
            Some(span) => attribution::name_after_span(span, &self.pending)
                .or_else(|| attribution::name_from_text(&self.pending)),
            None if self.pending.is_empty() => None,
            None => attribution::name_from_text(&self.pending),
        };

        if name.is_none() {
            tracing::debug!("Database marker without a resolvable business name");
        }
        self.push(MessageSegment::database_indicator(name));
    }

    fn finish(mut self) -> Vec<MessageSegment> {
        self.flush_text();
        self.segments
    }
}

/// Parse `text` with default options.
pub fn parse(text: &str) -> ParsedMessage {
    MessageFormatter::default().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(msg: &ParsedMessage) -> Vec<SegmentType> {
        msg.iter().map(|s| s.segment_type()).collect()
    }

    #[test]
    fn test_newlines_between_list_items_are_kept() {
        let msg = parse("Results:\n1. A\n2. B\nThanks");
        assert_eq!(
            kinds(&msg),
            vec![
                SegmentType::Text,
                SegmentType::NumberedList,
                SegmentType::Text,
                SegmentType::NumberedList,
                SegmentType::Text,
            ]
        );
        assert_eq!(msg.segments()[0].content(), "Results:\n");
        assert_eq!(msg.segments()[2].content(), "\n");
        assert_eq!(msg.segments()[4].content(), "\nThanks");
        assert_eq!(msg.to_plain_text(), "Results:\n1. A\n2. B\nThanks");
    }

    #[test]
    fn test_crlf_terminators() {
        let msg = parse("- a\r\n- b");
        assert_eq!(
            kinds(&msg),
            vec![SegmentType::Bullet, SegmentType::Text, SegmentType::Bullet]
        );
        assert_eq!(msg.segments()[1].content(), "\r\n");
    }

    #[test]
    fn test_indicator_inside_list_line_follows_item() {
        let msg = parse("1. **Acme Plumbing** (from our database): 24h service");
        assert_eq!(
            kinds(&msg),
            vec![SegmentType::NumberedList, SegmentType::DatabaseIndicator]
        );
        assert_eq!(msg.segments()[0].content(), "Acme Plumbing: 24h service");
        assert_eq!(msg.database_business_names(), vec!["Acme Plumbing"]);
    }

    #[test]
    fn test_disabled_lists_treat_lines_as_text() {
        let formatter = MessageFormatter::new(FormatterOptions::builder().lists(false).build())
            .expect("valid options");
        let msg = formatter.parse("1. one\n- two");
        assert_eq!(kinds(&msg), vec![SegmentType::Text]);
    }

    #[test]
    fn test_disabled_italic_keeps_delimiters() {
        let formatter = MessageFormatter::new(FormatterOptions::builder().italic(false).build())
            .expect("valid options");
        let msg = formatter.parse("an *aside*");
        assert_eq!(msg.len(), 1);
        assert_eq!(msg.segments()[0].content(), "an *aside*");
    }

    #[test]
    fn test_disabled_indicators_keep_marker_text() {
        let formatter = MessageFormatter::new(
            FormatterOptions::builder().database_indicators(false).build(),
        )
        .expect("valid options");
        let msg = formatter.parse("Acme (from our database)");
        assert!(!msg.has_database_references());
        assert_eq!(msg.to_plain_text(), "Acme (from our database)");
    }

    #[test]
    fn test_indicator_after_bold_and_plain_tail() {
        let msg = parse("**Acme** Plumbing (from our database)");
        assert_eq!(
            kinds(&msg),
            vec![
                SegmentType::Bold,
                SegmentType::Text,
                SegmentType::DatabaseIndicator,
            ]
        );
        assert_eq!(msg.database_business_names(), vec!["Acme Plumbing"]);

        let msg = parse("Ask **Acme**, then Bolt Electric (from our database)");
        assert_eq!(msg.database_business_names(), vec!["Bolt Electric"]);
    }

    #[test]
    fn test_unmatched_bold_in_long_gap_stays_text() {
        let text = format!("**{}", "word ".repeat(200));
        let msg = parse(text.trim_end());
        assert_eq!(kinds(&msg), vec![SegmentType::Text]);
        assert_eq!(msg.to_plain_text(), text.trim_end());
    }

    #[test]
    fn test_indicator_without_name() {
        let msg = parse("(from our database) entries follow");
        assert!(msg.has_database_references());
        assert!(msg.database_business_names().is_empty());
    }
}

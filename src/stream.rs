//! Incremental formatting of streamed chat completions.
//!
//! A chat UI receives an assistant message as a sequence of text deltas and
//! re-renders after each one. Markup can be split across deltas (`**Ac` +
//! `me**`), so every snapshot is a full re-parse of the text received so far.

use async_stream::stream;
use futures::{Stream, StreamExt};
use std::pin::Pin;

use crate::parser::MessageFormatter;
use crate::types::ParsedMessage;

/// Buffers streamed deltas of one message.
#[derive(Debug, Clone, Default)]
pub struct MessageAccumulator {
    formatter: MessageFormatter,
    buffer: String,
}

impl MessageAccumulator {
    pub fn new(formatter: MessageFormatter) -> Self {
        Self {
            formatter,
            buffer: String::new(),
        }
    }

    /// Append a delta and return the snapshot of the whole message so far.
    pub fn push(&mut self, delta: &str) -> ParsedMessage {
        self.buffer.push_str(delta);
        self.snapshot()
    }

    pub fn snapshot(&self) -> ParsedMessage {
        self.formatter.parse(&self.buffer)
    }

    /// Text received so far.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Drop the buffered text, keeping the formatter for the next message.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    pub fn finish(self) -> ParsedMessage {
        self.snapshot()
    }
}

/// Map a stream of text deltas to a stream of message snapshots, one per
/// delta.
pub fn format_stream<S>(
    formatter: MessageFormatter,
    deltas: S,
) -> Pin<Box<dyn Stream<Item = ParsedMessage> + Send>>
where
    S: Stream<Item = String> + Send + 'static,
{
    let stream = stream! {
        let mut accumulator = MessageAccumulator::new(formatter);
        let mut deltas = Box::pin(deltas);
        let mut received = 0usize;
        while let Some(delta) = deltas.next().await {
            received += 1;
            yield accumulator.push(&delta);
        }
        tracing::trace!("Message stream ended after {} deltas", received);
    };
    Box::pin(stream)
}

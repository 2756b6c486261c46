//! Shared helpers for parser fixtures.
//!
//! Provides the segment dump used by `inspect` and the assertion helpers the
//! fixtures print their progress through.

use message_formatting::{ParsedMessage, SegmentType, parse};

/// One line per segment: index, type, quoted content and metadata.
pub fn describe(msg: &ParsedMessage) -> String {
    let mut out = String::new();
    for (idx, segment) in msg.iter().enumerate() {
        out.push_str(&format!(
            "[{}] {:<18} {:?}",
            idx,
            segment.segment_type().to_string(),
            segment.content()
        ));
        if let Some(number) = segment.number() {
            out.push_str(&format!(" number={}", number));
        }
        if let Some(name) = segment.business_name() {
            out.push_str(&format!(" businessName={:?}", name));
        }
        out.push('\n');
    }
    if msg.is_empty() {
        out.push_str("(empty message)\n");
    }
    out
}

/// Parse `input`, print its segments, and check the segment type sequence.
pub fn expect_kinds(input: &str, expected: &[SegmentType]) -> Result<ParsedMessage, anyhow::Error> {
    println!("    input: {:?}", input);
    let msg = parse(input);
    for line in describe(&msg).lines() {
        println!("      {}", line);
    }

    let actual: Vec<SegmentType> = msg.iter().map(|s| s.segment_type()).collect();
    if actual != expected {
        anyhow::bail!("expected {:?}, got {:?}", expected, actual);
    }
    Ok(msg)
}

/// Fail unless no `Text` segment is empty.
pub fn assert_no_empty_text(msg: &ParsedMessage) -> Result<(), anyhow::Error> {
    if let Some(idx) = msg
        .iter()
        .position(|s| s.segment_type() == SegmentType::Text && s.content().is_empty())
    {
        anyhow::bail!("empty text segment at index {}", idx);
    }
    Ok(())
}

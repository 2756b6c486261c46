//! Test: Bold span segmentation.
//!
//! Verifies that bold spans split surrounding text without leaving empty
//! text segments at the edges or between adjacent spans.
//!
//! Covers: SegmentType::Bold, SegmentType::Text

use message_formatting::SegmentType::{Bold, Text};

use super::helpers::{assert_no_empty_text, expect_kinds};

pub async fn run() -> Result<(), anyhow::Error> {
    println!("=== Test: Bold spans ===\n");

    println!("  --- Two spans with trailing text ---");
    let msg = expect_kinds("**First** and **Second** bold texts.", &[Bold, Text, Bold, Text])?;
    assert_no_empty_text(&msg)?;

    println!("  --- Spans at both edges ---");
    let msg = expect_kinds("**Start** middle **End**", &[Bold, Text, Bold])?;
    assert_no_empty_text(&msg)?;

    println!("  --- Directly adjacent spans ---");
    let msg = expect_kinds("**A****B**", &[Bold, Bold])?;
    assert_eq!(msg.segments()[1].content(), "B");

    println!("\n  All bold span checks passed");
    Ok(())
}

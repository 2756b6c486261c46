//! Test: Numbered and bullet lines.
//!
//! Inline formatting inside a list line is flattened into the item's
//! content; newlines between items survive as text segments.
//!
//! Covers: SegmentType::NumberedList, SegmentType::Bullet, flattening

use message_formatting::SegmentType::{Bullet, NumberedList, Text};

use super::helpers::expect_kinds;

pub async fn run() -> Result<(), anyhow::Error> {
    println!("=== Test: List lines ===\n");

    println!("  --- Numbered line with embedded bold ---");
    let msg = expect_kinds(
        "1. **Beyond The Numbers Accounting**: Revenue of **$12,524,122**.",
        &[NumberedList],
    )?;
    assert_eq!(
        msg.segments()[0].content(),
        "Beyond The Numbers Accounting: Revenue of $12,524,122."
    );
    assert_eq!(msg.segments()[0].number(), Some(1));

    println!("  --- Marker only ---");
    let msg = expect_kinds("1. ", &[NumberedList])?;
    assert!(!msg.is_empty());

    println!("  --- Mixed list ---");
    let msg = expect_kinds(
        "Options:\n- *Fast* delivery\n3. Late hours",
        &[Text, Bullet, Text, NumberedList],
    )?;
    assert_eq!(msg.to_plain_text(), "Options:\n• Fast delivery\n3. Late hours");

    println!("\n  All list checks passed");
    Ok(())
}

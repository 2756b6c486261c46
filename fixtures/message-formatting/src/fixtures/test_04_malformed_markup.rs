//! Test: Malformed markup degrades to text.
//!
//! Unbalanced delimiters must never be dropped or cause a failure; they stay
//! in text segments with their original characters.
//!
//! Covers: totality, lossless fallback

use message_formatting::{SegmentType::Text, parse};

use super::helpers::{assert_no_empty_text, expect_kinds};

pub async fn run() -> Result<(), anyhow::Error> {
    println!("=== Test: Malformed markup ===\n");

    for input in ["**bold without close", "**bold* text", "2 * 3 * 4", "snake_case_name"] {
        let msg = expect_kinds(input, &[Text])?;
        assert_eq!(msg.segments()[0].content(), input);
    }

    println!("  --- Empty and whitespace-only ---");
    assert!(parse("").is_empty());
    assert!(parse(" \n\t").is_empty());

    println!("  --- Long input ---");
    let long = "**x** *y* _z_ (from our database) ** __ \n- 1. ".repeat(400);
    let msg = parse(&long);
    assert_no_empty_text(&msg)?;
    println!("    {} bytes -> {} segments", long.len(), msg.len());

    println!("\n  All malformed markup checks passed");
    Ok(())
}

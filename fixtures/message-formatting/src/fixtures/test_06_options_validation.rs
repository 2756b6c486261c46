//! Test: Formatter options.
//!
//! Verifies option validation and that disabled constructs fall back to text.
//!
//! Covers: FormatterOptions, Error::InvalidOptions, Error::JsonDecode

use message_formatting::{Error, FormatterOptions, MessageFormatter, SegmentType};

pub async fn run() -> Result<(), anyhow::Error> {
    println!("=== Test: Options validation ===\n");

    println!("  --- Blank marker rejected ---");
    let options = FormatterOptions::builder().database_markers([" "]).build();
    match MessageFormatter::new(options) {
        Err(Error::InvalidOptions(msg)) => println!("    Got expected error: {}", msg),
        other => anyhow::bail!("expected InvalidOptions, got {:?}", other),
    }

    println!("  --- Malformed JSON rejected ---");
    match FormatterOptions::from_json("{lists: no}") {
        Err(Error::JsonDecode(e)) => println!("    Got expected error: {}", e),
        other => anyhow::bail!("expected JsonDecode, got {:?}", other),
    }

    println!("  --- Lists disabled via JSON ---");
    let formatter = MessageFormatter::new(FormatterOptions::from_json(r#"{"lists": false}"#)?)?;
    let msg = formatter.parse("1. one\n- two");
    assert_eq!(msg.len(), 1);
    assert_eq!(msg.segments()[0].segment_type(), SegmentType::Text);
    println!("    Passed");

    println!("\n  All options checks passed");
    Ok(())
}

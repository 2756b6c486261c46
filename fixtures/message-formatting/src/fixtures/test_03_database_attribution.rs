//! Test: "(from our database)" attribution.
//!
//! Covers: SegmentType::DatabaseIndicator, business-name resolution,
//! ParsedMessage::database_business_names

use message_formatting::SegmentType::{Bold, DatabaseIndicator, NumberedList, Text};

use super::helpers::expect_kinds;

pub async fn run() -> Result<(), anyhow::Error> {
    println!("=== Test: Database attribution ===\n");

    println!("  --- After a bold name ---");
    let msg = expect_kinds(
        "**Bank of America** (from our database) has significant presence",
        &[Bold, DatabaseIndicator, Text],
    )?;
    assert_eq!(msg.database_business_names(), vec!["Bank of America"]);

    println!("  --- After a plain name ---");
    let msg = expect_kinds(
        "Try Main Street Bakery (from our database) for bread.",
        &[Text, DatabaseIndicator, Text],
    )?;
    println!("    resolved: {:?}", msg.database_business_names());
    assert!(msg.has_database_references());

    println!("  --- Inside a list line ---");
    let msg = expect_kinds(
        "2. **Acme Plumbing** (from our database): 24h service",
        &[NumberedList, DatabaseIndicator],
    )?;
    assert_eq!(msg.database_business_names(), vec!["Acme Plumbing"]);

    println!("\n  All attribution checks passed");
    Ok(())
}

//! Test: Streaming deltas.
//!
//! Simulates a chat completion arriving in chunks that split markup, and
//! prints every snapshot the UI would render.
//!
//! Covers: format_stream, MessageAccumulator

use futures::StreamExt;
use message_formatting::{MessageFormatter, SegmentType, format_stream};

use super::helpers::describe;

pub async fn run() -> Result<(), anyhow::Error> {
    println!("=== Test: Streaming ===\n");

    let deltas = futures::stream::iter(
        ["Top pick: **Acme ", "Plumbing** (from our ", "database)\n1. Call ", "*today*"]
            .into_iter()
            .map(String::from),
    );

    let mut stream = format_stream(MessageFormatter::default(), deltas);
    let mut last = None;
    let mut count = 0;
    while let Some(snapshot) = stream.next().await {
        count += 1;
        println!("  --- Snapshot {} ---", count);
        for line in describe(&snapshot).lines() {
            println!("    {}", line);
        }
        last = Some(snapshot);
    }

    let last = last.ok_or_else(|| anyhow::anyhow!("stream produced no snapshots"))?;
    assert_eq!(count, 4);
    assert_eq!(last.database_business_names(), vec!["Acme Plumbing"]);
    let items = last.segments_by_type(SegmentType::NumberedList);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].content(), "Call today");

    println!("\n  All streaming checks passed");
    Ok(())
}

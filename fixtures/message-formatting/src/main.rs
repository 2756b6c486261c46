//! Fixture runner for message-formatting.
//!
//! Run individual fixtures: cargo run -p message-formatting-fixtures -- test_01
//! Run all:                 cargo run -p message-formatting-fixtures -- all
//! Inspect a message:       echo '**Acme** (from our database)' | cargo run -p message-formatting-fixtures -- inspect
//! Inspect as JSON:         ... -- inspect --json

use std::env;
use std::io::Read;

mod fixtures;

fn main() {
    let args: Vec<String> = env::args().collect();
    let test_name = args.get(1).map(|s| s.as_str()).unwrap_or("all");

    let rt = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let result = rt.block_on(async {
        match test_name {
            "test_01" => fixtures::test_01_bold_spans::run().await,
            "test_02" => fixtures::test_02_list_lines::run().await,
            "test_03" => fixtures::test_03_database_attribution::run().await,
            "test_04" => fixtures::test_04_malformed_markup::run().await,
            "test_05" => fixtures::test_05_streaming::run().await,
            "test_06" => fixtures::test_06_options_validation::run().await,
            "inspect" => inspect(args.iter().any(|a| a == "--json")),
            "all" => run_all().await,
            _ => {
                eprintln!("Unknown fixture: {}", test_name);
                eprintln!("Available: test_01..test_06, inspect [--json], all");
                Err(anyhow::anyhow!("Unknown fixture"))
            }
        }
    });

    if let Err(e) = result {
        eprintln!("Fixture failed: {}", e);
        std::process::exit(1);
    }
}

/// Parse stdin and print its segments.
fn inspect(json: bool) -> Result<(), anyhow::Error> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    let msg = message_formatting::parse(&text);

    if json {
        let value: serde_json::Value = serde_json::from_str(&msg.to_json()?)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", fixtures::helpers::describe(&msg));
    }
    Ok(())
}

/// Run all fixtures.
async fn run_all() -> Result<(), anyhow::Error> {
    macro_rules! run {
        ($name:expr, $fn:path) => {
            println!("\n>>> Running {} <<<", $name);
            $fn().await?;
            println!(">>> {} passed <<<", $name);
        };
    }

    run!("test_01_bold_spans", fixtures::test_01_bold_spans::run);
    run!("test_02_list_lines", fixtures::test_02_list_lines::run);
    run!("test_03_database_attribution", fixtures::test_03_database_attribution::run);
    run!("test_04_malformed_markup", fixtures::test_04_malformed_markup::run);
    run!("test_05_streaming", fixtures::test_05_streaming::run);
    run!("test_06_options_validation", fixtures::test_06_options_validation::run);

    println!("\nAll fixtures passed");
    Ok(())
}

//! Example: Validate location expressions against a region fixture.
//!
//! Usage:
//!   cargo run --example validate_locations -- <regions.json> <genome_id> <location>...
//!
//! Example:
//!   cargo run --example validate_locations -- regions.json g1 1:500-1000 X:0-10

use std::env;

use genome_gateway::{FieldResult, RegionValidator, StaticMetadataBackend};

#[tokio::main(flavor = "current_thread")]
async fn main() -> genome_gateway::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        eprintln!("Usage: cargo run --example validate_locations -- <regions.json> <genome_id> <location>...");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example validate_locations -- regions.json g1 1:500-1000");
        std::process::exit(1);
    }

    let validator = RegionValidator::new(StaticMetadataBackend::from_path(&args[1])?);
    let genome_id = args[2].as_str();

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Validating {} location(s) for genome {}", args.len() - 3, genome_id);
    println!("{}", separator);

    for location in &args[3..] {
        let outcome = validator.validate(Some(genome_id), location).await;

        println!();
        println!("{}", location);
        for (label, field) in [
            ("region", outcome.region()),
            ("start", outcome.start()),
            ("end", outcome.end()),
        ] {
            let line = match field {
                FieldResult::Valid { value } => format!("ok      {}", value),
                FieldResult::Invalid { error_message, .. } => format!("invalid {}", error_message),
                FieldResult::Unattempted => "-".to_string(),
            };
            println!("  {:<7} {}", label, line);
        }
        println!("  => {}", outcome.location().unwrap_or("invalid"));
    }

    println!();
    println!("Backend lookups: {}", validator.backend().lookup_count());

    Ok(())
}

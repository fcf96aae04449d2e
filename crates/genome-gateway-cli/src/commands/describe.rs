//! Describe command - show the backend's view of one region.

use colored::Colorize;
use genome_gateway::{MetadataBackend, RegionKind};
use serde::Serialize;

use crate::backend::{Backend, BackendOptions};

use super::{CommandResult, Status};

pub async fn run(
    region: String,
    genome: String,
    json_output: bool,
    options: BackendOptions,
) -> CommandResult {
    let backend = Backend::from_options(&options)?;
    let descriptor = backend.describe_region(&genome, &region).await?;

    if json_output {
        let report = DescribeReport {
            genome_id: &genome,
            region_name: &region,
            exists: descriptor.exists,
            length: descriptor.length,
            is_chromosomal: descriptor.is_chromosomal,
            kind: descriptor.kind(),
            backend: backend.name(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(kind) = descriptor.kind() {
        println!(
            "{} {} {} {}",
            "Region".cyan().bold(),
            region.white(),
            "of genome".cyan().bold(),
            genome.white()
        );
        println!("  Length: {}", descriptor.length.to_string().white().bold());
        println!("  Kind:   {}", kind.label());
    } else {
        println!(
            "{} Could not find region {} for {}",
            "Not found:".red().bold(),
            region,
            genome
        );
    }

    Ok(Status::from_valid(descriptor.exists))
}

/// JSON output of the describe command.
#[derive(Serialize)]
struct DescribeReport<'a> {
    genome_id: &'a str,
    region_name: &'a str,
    exists: bool,
    length: u64,
    is_chromosomal: bool,
    kind: Option<RegionKind>,
    backend: &'a str,
}

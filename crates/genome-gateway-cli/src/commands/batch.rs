//! Batch command - validate many location expressions at once.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use colored::Colorize;
use genome_gateway::RegionValidator;

use crate::backend::{Backend, BackendOptions};

use super::{CommandResult, Status};

pub async fn run(
    file: PathBuf,
    genome: Option<String>,
    json_output: bool,
    options: BackendOptions,
    verbose: bool,
) -> CommandResult {
    let locations = read_locations(&file)?;
    if locations.is_empty() {
        println!("{} No locations to validate.", "Note:".yellow());
        return Ok(Status::Success);
    }

    let validator = RegionValidator::new(Backend::from_options(&options)?);

    let mut valid = 0;
    let mut invalid = 0;
    for location in &locations {
        let outcome = validator.validate(genome.as_deref(), location).await;
        if outcome.is_valid() {
            valid += 1;
        } else {
            invalid += 1;
        }

        if json_output {
            let line = serde_json::json!({ "input": location, "result": outcome });
            println!("{}", serde_json::to_string(&line)?);
            continue;
        }

        match outcome.location() {
            Some(canonical) => println!("  {} {} {}", "✓".green(), location, canonical.dimmed()),
            None => {
                let reason = outcome
                    .errors()
                    .first()
                    .map(|(field, message)| format!("{}: {}", field, message))
                    .unwrap_or_else(|| "not checked (no genome given)".to_string());
                println!("  {} {} {}", "✗".red(), location, reason.red());
                if verbose {
                    for (field, message) in outcome.errors().iter().skip(1) {
                        println!("      {} {}: {}", "•".dimmed(), field, message);
                    }
                }
            }
        }
    }

    if !json_output {
        println!();
        println!(
            "{} {} location(s): {} valid, {} invalid",
            "Done:".green().bold(),
            locations.len().to_string().white().bold(),
            valid.to_string().green(),
            invalid.to_string().red()
        );
    }

    Ok(Status::from_valid(invalid == 0))
}

/// Read non-empty, non-comment lines from a file, or stdin for "-".
fn read_locations(file: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let lines: Vec<String> = if file == Path::new("-") {
        std::io::stdin().lock().lines().collect::<Result<_, _>>()?
    } else {
        if !file.exists() {
            return Err(format!("Location file not found: {}", file.display()).into());
        }
        std::fs::read_to_string(file)?
            .lines()
            .map(str::to_string)
            .collect()
    };

    Ok(lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect())
}

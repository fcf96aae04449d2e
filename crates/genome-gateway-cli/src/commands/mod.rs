//! CLI command implementations.

pub mod batch;
pub mod describe;
pub mod validate;

use colored::Colorize;
use genome_gateway::{FieldResult, ValidationOutcome};

/// How a command finished, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Everything checked out.
    Success,
    /// The command ran, but at least one location was invalid.
    Invalid,
}

impl Status {
    pub fn exit_code(self) -> i32 {
        match self {
            Status::Success => 0,
            Status::Invalid => 2,
        }
    }

    fn from_valid(valid: bool) -> Self {
        if valid {
            Status::Success
        } else {
            Status::Invalid
        }
    }
}

pub type CommandResult = Result<Status, Box<dyn std::error::Error>>;

/// Print one field line of a human-readable outcome.
fn print_field(label: &str, result: &FieldResult, detail: Option<String>) {
    let label = format!("{:<7}", label);
    match result {
        FieldResult::Valid { value } => {
            let detail = detail.map(|d| format!(" ({})", d)).unwrap_or_default();
            println!("  {} {} {}{}", "✓".green(), label, value.to_string().white(), detail.dimmed());
        }
        FieldResult::Invalid {
            raw_value,
            error_message,
        } => {
            println!(
                "  {} {} {}  {}",
                "✗".red(),
                label,
                raw_value.to_string().white(),
                error_message.red()
            );
        }
        FieldResult::Unattempted => {
            println!("  {} {} {}", "·".dimmed(), label, "not checked".dimmed());
        }
    }
}

/// Print a validation outcome for a human reader.
fn print_outcome(location: &str, outcome: &ValidationOutcome) {
    match outcome.genome_id() {
        Some(genome_id) => println!(
            "{} {} {} {}",
            "Location".cyan().bold(),
            location.white(),
            "in genome".cyan().bold(),
            genome_id.white()
        ),
        None => {
            println!(
                "{} {}",
                "Location".cyan().bold(),
                location.white()
            );
            println!(
                "  {} no genome given, nothing was checked (use --genome)",
                "Note:".yellow()
            );
            return;
        }
    }

    let kind = outcome.region_kind().map(|k| k.label().to_string());
    print_field("region", outcome.region(), kind);
    print_field("start", outcome.start(), None);
    print_field("end", outcome.end(), None);

    match outcome.location() {
        Some(canonical) => println!("{} {}", "Valid:".green().bold(), canonical),
        None => println!("{}", "Invalid location".red().bold()),
    }
}

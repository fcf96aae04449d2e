//! Validate command - check a single location expression.

use genome_gateway::RegionValidator;

use crate::backend::{Backend, BackendOptions};

use super::{print_outcome, CommandResult, Status};

pub async fn run(
    location: String,
    genome: Option<String>,
    json_output: bool,
    options: BackendOptions,
) -> CommandResult {
    let validator = RegionValidator::new(Backend::from_options(&options)?);
    let outcome = validator.validate(genome.as_deref(), &location).await;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&location, &outcome);
    }

    Ok(Status::from_valid(outcome.is_valid()))
}

//! Genome Gateway CLI - validate genomic locations from the command line.

mod backend;
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.log_filter()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let options = cli.backend_options();

    let result = match cli.command {
        Commands::Validate {
            location,
            genome,
            json,
        } => commands::validate::run(location, genome, json, options).await,

        Commands::Describe {
            region,
            genome,
            json,
        } => commands::describe::run(region, genome, json, options).await,

        Commands::Batch { file, genome, json } => {
            commands::batch::run(file, genome, json, options, cli.verbose).await
        }
    };

    match result {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

//! CLI argument definitions using clap.

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::backend::BackendOptions;

/// Genome Gateway: validate genomic locations against a genome metadata service
#[derive(Parser)]
#[command(name = "genome-gateway")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log filter directive, e.g. "info" or "genome_gateway=trace"
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Base URL of the metadata service (default: METADATA_URL, or METADATA_HOST/METADATA_PORT)
    #[arg(long, global = true, value_name = "URL", conflicts_with = "regions")]
    pub backend_url: Option<String>,

    /// Answer region lookups from a JSON fixture instead of the metadata service
    #[arg(long, global = true, value_name = "FILE")]
    pub regions: Option<PathBuf>,

    /// Region lookup timeout in seconds
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Log filter to install, from the most specific flag given.
    pub fn log_filter(&self) -> &str {
        match (&self.log_level, self.verbose) {
            (Some(level), _) => level,
            (None, true) => "debug",
            (None, false) => "warn",
        }
    }

    /// Backend selection flags.
    pub fn backend_options(&self) -> BackendOptions {
        BackendOptions {
            backend_url: self.backend_url.clone(),
            regions: self.regions.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a location expression such as 1:500-1,000
    Validate {
        /// Location expression (name:start-end)
        #[arg(value_name = "LOCATION")]
        location: String,

        /// Genome identifier the location refers to
        #[arg(short, long)]
        genome: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what the metadata service knows about a region
    Describe {
        /// Region name, e.g. 1 or X
        #[arg(value_name = "REGION", value_parser = NonEmptyStringValueParser::new())]
        region: String,

        /// Genome identifier
        #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
        genome: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate one location per line from a file ("-" for stdin)
    Batch {
        /// File with one location expression per line
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Genome identifier the locations refer to
        #[arg(short, long)]
        genome: Option<String>,

        /// Output one JSON object per line
        #[arg(long)]
        json: bool,
    },
}

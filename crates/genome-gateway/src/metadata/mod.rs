//! Genome metadata backends.
//!
//! The validator needs exactly one capability from the metadata service:
//! describing a named region of a genome. [`MetadataBackend`] abstracts it so
//! the transport is injected rather than global.
//!
//! # Backends
//!
//! - **HTTP** - the remote metadata service (`METADATA_URL` or
//!   `METADATA_HOST`/`METADATA_PORT`)
//! - **Static** - an in-memory region table, optionally loaded from a JSON fixture
//!
//! # Example
//!
//! ```no_run
//! use genome_gateway::{HttpMetadataBackend, RegionValidator};
//!
//! # async fn run() -> genome_gateway::Result<()> {
//! let validator = RegionValidator::new(HttpMetadataBackend::from_env()?);
//! let outcome = validator.validate(Some("a7335667-93e7"), "1:500-1000").await;
//! println!("{}", serde_json::to_string(&outcome)?);
//! # Ok(())
//! # }
//! ```

mod backend;
mod config;
mod fixture;
mod http;

pub use backend::{MetadataBackend, RegionDescriptor, RegionKind};
pub use config::{MetadataConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS};
pub use fixture::{RegionRecord, StaticMetadataBackend};
pub use http::HttpMetadataBackend;

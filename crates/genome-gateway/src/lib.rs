//! Genome Gateway: genomic region location validation.
//!
//! The gateway sits between a web client and a genome metadata service. Its
//! one piece of real logic is checking a user-typed location such as
//! `1:500-1,000` against the metadata service: does the region exist in the
//! genome, and do the start and end fall inside it?
//!
//! # Core Principles
//!
//! - **Never fails**: malformed input and backend outages become field errors
//! - **One round trip**: at most one backend lookup per validation, no retries
//! - **Injected backend**: the metadata transport is a constructor argument
//!
//! # Example
//!
//! ```no_run
//! use genome_gateway::{RegionValidator, StaticMetadataBackend};
//!
//! # async fn run() {
//! let backend = StaticMetadataBackend::new().with_region("g1", "1", 2000, true);
//! let validator = RegionValidator::new(backend);
//!
//! let outcome = validator.validate(Some("g1"), "1:500-1000").await;
//! assert!(outcome.is_valid());
//! assert_eq!(outcome.location(), Some("1:500-1000"));
//! # }
//! ```

pub mod error;
pub mod location;
pub mod metadata;
pub mod validation;

pub use error::{GatewayError, Result};
pub use location::{parse_location, LocationExpression, ParsedLocation};
pub use metadata::{
    HttpMetadataBackend, MetadataBackend, MetadataConfig, RegionDescriptor, RegionKind,
    StaticMetadataBackend,
};
pub use validation::{
    FieldResult, FieldValue, RegionValidationResponse, RegionValidator, ValidationOutcome,
};

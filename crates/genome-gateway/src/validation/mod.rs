//! Region location validation.
//!
//! Turns a `(genome_id, location expression)` pair into a
//! [`ValidationOutcome`] with one [`FieldResult`] per checked dimension.

mod field;
mod outcome;
mod validator;

pub use field::{FieldResult, FieldValue};
pub use outcome::{
    CoordinateFieldResponse, OutcomeBuilder, RegionFieldResponse, RegionValidationResponse,
    ValidationOutcome,
};
pub use validator::{check_end, check_start, RegionValidator, INVALID_REGION_MESSAGE};

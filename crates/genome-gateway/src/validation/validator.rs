//! Region location validator.

use crate::location::LocationExpression;
use crate::metadata::{MetadataBackend, RegionDescriptor};

use super::field::FieldResult;
use super::outcome::ValidationOutcome;

/// Message for an expression that did not yield a region name.
pub const INVALID_REGION_MESSAGE: &str = "Invalid region";

/// Validates location expressions against a metadata backend.
///
/// Validation runs three stages in order: region existence, start bound, end
/// bound. A failed stage leaves the later ones unattempted. Each validation
/// makes at most one backend call and never fails; backend errors are logged
/// and reported as an unknown region.
pub struct RegionValidator<B> {
    backend: B,
}

impl<B: MetadataBackend> RegionValidator<B> {
    /// Create a validator using the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The backend this validator consults.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Validate a raw `name:start-end` expression for a genome.
    ///
    /// With no (or an empty) genome identifier nothing is checked and the
    /// backend is not called.
    pub async fn validate(&self, genome_id: Option<&str>, location: &str) -> ValidationOutcome {
        self.validate_expression(genome_id, &LocationExpression::from(location))
            .await
    }

    /// Validate an already wrapped expression.
    pub async fn validate_expression(
        &self,
        genome_id: Option<&str>,
        expression: &LocationExpression,
    ) -> ValidationOutcome {
        let Some(genome_id) = genome_id.filter(|id| !id.is_empty()) else {
            tracing::debug!(location = %expression, "no genome identifier, skipping validation");
            return ValidationOutcome::not_attempted();
        };

        let parsed = expression.parse();
        let outcome = ValidationOutcome::builder(genome_id);

        if parsed.region_name.is_empty() {
            return outcome
                .region(FieldResult::invalid("", INVALID_REGION_MESSAGE))
                .build();
        }
        let region_name = parsed.region_name.as_str();

        let Some(descriptor) = self.resolve_region(genome_id, region_name).await else {
            return outcome
                .region(FieldResult::invalid(
                    region_name,
                    format!("Could not find region {} for {}", region_name, genome_id),
                ))
                .build();
        };

        let outcome = match descriptor.kind() {
            Some(kind) => outcome.region_kind(kind),
            None => outcome,
        };

        let start = check_start(parsed.start_token(), descriptor.length);
        let end = match start.valid_integer() {
            Some(start_value) => check_end(parsed.end_token(), start_value, descriptor.length),
            None => FieldResult::Unattempted,
        };

        outcome
            .region(FieldResult::valid(region_name))
            .start(start)
            .end(end)
            .build()
    }

    /// Look the region up, folding "not found" and backend failure together.
    async fn resolve_region(&self, genome_id: &str, region_name: &str) -> Option<RegionDescriptor> {
        tracing::debug!(
            backend = self.backend.name(),
            genome_id,
            region_name,
            "describing region"
        );

        match self.backend.describe_region(genome_id, region_name).await {
            Ok(descriptor) if descriptor.exists => Some(descriptor),
            Ok(_) => {
                tracing::debug!(genome_id, region_name, "region not found");
                None
            }
            Err(e) => {
                tracing::warn!(
                    backend = self.backend.name(),
                    genome_id,
                    region_name,
                    error = %e,
                    "region lookup failed, treating region as unknown"
                );
                None
            }
        }
    }
}

/// Check a start token against a region length.
///
/// Valid iff the token is an integer with `0 < start < length`.
pub fn check_start(token: &str, length: u64) -> FieldResult {
    let out_of_range = format!("start should be between 1 and {}", length);
    match parse_coordinate(token) {
        Some(Coordinate::Value(start)) if start > 0 && start < length => FieldResult::valid(start),
        Some(Coordinate::Value(start)) => FieldResult::invalid(start, out_of_range),
        Some(Coordinate::Oversized(digits)) => FieldResult::invalid(digits, out_of_range),
        None => FieldResult::invalid(token, format!("start {} is invalid", token)),
    }
}

/// Check an end token against a region length and a valid start.
///
/// An absent token resolves to `length`. Valid iff `start < end <= length`.
pub fn check_end(token: Option<&str>, start: u64, length: u64) -> FieldResult {
    let out_of_range = |end: &str| {
        format!(
            "end should be between 1 and {} and end ({}) > start ({})",
            length, end, start
        )
    };

    let end = match token {
        None => length,
        Some(token) => match parse_coordinate(token) {
            Some(Coordinate::Value(end)) => end,
            Some(Coordinate::Oversized(digits)) => {
                return FieldResult::invalid(digits, out_of_range(digits));
            }
            None => return FieldResult::invalid(token, format!("end {} is invalid", token)),
        },
    };

    if end <= length && end > start {
        FieldResult::valid(end)
    } else {
        FieldResult::invalid(end, out_of_range(&end.to_string()))
    }
}

/// A coordinate token that reads as a whole number.
enum Coordinate<'a> {
    Value(u64),
    /// All digits, but too large for any region; kept as written.
    Oversized(&'a str),
}

fn parse_coordinate(token: &str) -> Option<Coordinate<'_>> {
    let trimmed = token.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return Some(Coordinate::Value(value));
    }

    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .then_some(Coordinate::Oversized(trimmed))
}

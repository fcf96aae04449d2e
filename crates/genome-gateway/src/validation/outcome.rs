//! Validation outcome and its wire representation.

use serde::{Deserialize, Serialize};

use crate::metadata::RegionKind;

use super::field::{FieldResult, FieldValue};

/// The complete result of validating one location expression.
///
/// Built once through [`OutcomeBuilder`] and never modified afterwards.
/// Serializes to the fixed response shape described by
/// [`RegionValidationResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "RegionValidationResponse")]
pub struct ValidationOutcome {
    genome_id: Option<String>,
    region: FieldResult,
    start: FieldResult,
    end: FieldResult,
    region_kind: Option<RegionKind>,
    location: Option<String>,
}

impl ValidationOutcome {
    /// Outcome for a request that named no genome: nothing was checked.
    pub fn not_attempted() -> Self {
        Self {
            genome_id: None,
            region: FieldResult::Unattempted,
            start: FieldResult::Unattempted,
            end: FieldResult::Unattempted,
            region_kind: None,
            location: None,
        }
    }

    /// Start building an outcome for the given genome.
    pub fn builder(genome_id: impl Into<String>) -> OutcomeBuilder {
        OutcomeBuilder::new(genome_id)
    }

    /// True when a genome was given and region, start and end are all valid.
    pub fn is_valid(&self) -> bool {
        self.location.is_some()
    }

    /// False only when no genome identifier was supplied.
    pub fn was_attempted(&self) -> bool {
        self.genome_id.is_some()
    }

    pub fn genome_id(&self) -> Option<&str> {
        self.genome_id.as_deref()
    }

    pub fn region(&self) -> &FieldResult {
        &self.region
    }

    pub fn start(&self) -> &FieldResult {
        &self.start
    }

    pub fn end(&self) -> &FieldResult {
        &self.end
    }

    /// Kind of the region, known once the backend confirmed it exists.
    pub fn region_kind(&self) -> Option<RegionKind> {
        self.region_kind
    }

    /// Canonical `name:start-end` string, present only for valid outcomes.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Error messages keyed by field name, in region/start/end order.
    pub fn errors(&self) -> Vec<(&'static str, &str)> {
        [
            ("region", &self.region),
            ("start", &self.start),
            ("end", &self.end),
        ]
        .into_iter()
        .filter_map(|(field, result)| result.error_message().map(|msg| (field, msg)))
        .collect()
    }

    /// The wire representation of this outcome.
    pub fn to_response(&self) -> RegionValidationResponse {
        RegionValidationResponse::from(self.clone())
    }
}

/// Consuming builder for [`ValidationOutcome`].
///
/// Fields not set stay [`FieldResult::Unattempted`].
#[derive(Debug, Clone)]
pub struct OutcomeBuilder {
    genome_id: String,
    region: FieldResult,
    start: FieldResult,
    end: FieldResult,
    region_kind: Option<RegionKind>,
}

impl OutcomeBuilder {
    fn new(genome_id: impl Into<String>) -> Self {
        Self {
            genome_id: genome_id.into(),
            region: FieldResult::Unattempted,
            start: FieldResult::Unattempted,
            end: FieldResult::Unattempted,
            region_kind: None,
        }
    }

    pub fn region(mut self, result: FieldResult) -> Self {
        self.region = result;
        self
    }

    pub fn region_kind(mut self, kind: RegionKind) -> Self {
        self.region_kind = Some(kind);
        self
    }

    pub fn start(mut self, result: FieldResult) -> Self {
        self.start = result;
        self
    }

    pub fn end(mut self, result: FieldResult) -> Self {
        self.end = result;
        self
    }

    pub fn build(self) -> ValidationOutcome {
        let location = canonical_location(&self.region, &self.start, &self.end);
        ValidationOutcome {
            genome_id: Some(self.genome_id),
            region: self.region,
            start: self.start,
            end: self.end,
            region_kind: self.region_kind,
            location,
        }
    }
}

fn canonical_location(
    region: &FieldResult,
    start: &FieldResult,
    end: &FieldResult,
) -> Option<String> {
    let FieldResult::Valid {
        value: FieldValue::Text(name),
    } = region
    else {
        return None;
    };
    let start = start.valid_integer()?;
    let end = end.valid_integer()?;
    Some(format!("{}:{}-{}", name, start, end))
}

/// Response body for a region validation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionValidationResponse {
    pub region: RegionFieldResponse,
    pub start: CoordinateFieldResponse,
    pub end: CoordinateFieldResponse,
    pub location: Option<String>,
}

/// Serialized region field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionFieldResponse {
    pub region_name: Option<String>,
    pub is_valid: bool,
    pub error_message: Option<String>,
}

/// Serialized start or end field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateFieldResponse {
    pub value: Option<FieldValue>,
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl From<&FieldResult> for RegionFieldResponse {
    fn from(result: &FieldResult) -> Self {
        Self {
            region_name: result.value().map(ToString::to_string),
            is_valid: result.is_valid(),
            error_message: result.error_message().map(str::to_string),
        }
    }
}

impl From<&FieldResult> for CoordinateFieldResponse {
    fn from(result: &FieldResult) -> Self {
        Self {
            value: result.value().cloned(),
            is_valid: result.is_valid(),
            error_message: result.error_message().map(str::to_string),
        }
    }
}

impl From<ValidationOutcome> for RegionValidationResponse {
    fn from(outcome: ValidationOutcome) -> Self {
        Self {
            region: RegionFieldResponse::from(&outcome.region),
            start: CoordinateFieldResponse::from(&outcome.start),
            end: CoordinateFieldResponse::from(&outcome.end),
            location: outcome.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid_outcome() -> ValidationOutcome {
        ValidationOutcome::builder("g1")
            .region(FieldResult::valid("1"))
            .region_kind(RegionKind::Chromosome)
            .start(FieldResult::valid(500u64))
            .end(FieldResult::valid(1000u64))
            .build()
    }

    #[test]
    fn test_valid_outcome_has_location() {
        let outcome = valid_outcome();
        assert!(outcome.is_valid());
        assert!(outcome.was_attempted());
        assert_eq!(outcome.location(), Some("1:500-1000"));
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn test_unset_fields_stay_unattempted() {
        let outcome = ValidationOutcome::builder("g1")
            .region(FieldResult::invalid("", "Invalid region"))
            .build();
        assert!(!outcome.is_valid());
        assert!(outcome.was_attempted());
        assert_eq!(outcome.start(), &FieldResult::Unattempted);
        assert_eq!(outcome.end(), &FieldResult::Unattempted);
        assert_eq!(outcome.errors(), vec![("region", "Invalid region")]);
    }

    #[test]
    fn test_not_attempted_is_distinguishable() {
        let outcome = ValidationOutcome::not_attempted();
        assert!(!outcome.is_valid());
        assert!(!outcome.was_attempted());
        assert_eq!(outcome.genome_id(), None);
    }

    #[test]
    fn test_serialized_shape_valid() {
        let value = serde_json::to_value(valid_outcome()).unwrap();
        assert_eq!(
            value,
            json!({
                "region": {"region_name": "1", "is_valid": true, "error_message": null},
                "start": {"value": 500, "is_valid": true, "error_message": null},
                "end": {"value": 1000, "is_valid": true, "error_message": null},
                "location": "1:500-1000"
            })
        );
    }

    #[test]
    fn test_serialized_shape_invalid_start() {
        let outcome = ValidationOutcome::builder("g1")
            .region(FieldResult::valid("1"))
            .start(FieldResult::invalid(
                "abc",
                "start abc is invalid",
            ))
            .build();

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["start"]["value"], json!("abc"));
        assert_eq!(value["start"]["is_valid"], json!(false));
        assert_eq!(value["start"]["error_message"], json!("start abc is invalid"));
        assert_eq!(
            value["end"],
            json!({"value": null, "is_valid": false, "error_message": null})
        );
        assert_eq!(value["location"], json!(null));
    }

    #[test]
    fn test_serialized_shape_not_attempted() {
        let value = serde_json::to_value(ValidationOutcome::not_attempted()).unwrap();
        assert_eq!(
            value["region"],
            json!({"region_name": null, "is_valid": false, "error_message": null})
        );
        assert_eq!(value["location"], json!(null));
    }

    #[test]
    fn test_response_round_trips_through_json() {
        let response = valid_outcome().to_response();
        let text = serde_json::to_string(&response).unwrap();
        let parsed: RegionValidationResponse = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, response);
    }
}

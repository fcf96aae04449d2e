//! Location expression parser.
//!
//! A location expression has the form `name:start-end`, e.g. `1:500-1,000`.
//! Parsing is lenient: anything that does not fit the shape degrades to an
//! empty region name with the default start token, which the validator then
//! reports as an invalid region.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Start token used when the expression carries none.
pub const DEFAULT_START_TOKEN: &str = "1";

/// A raw, user-supplied location expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationExpression(String);

impl LocationExpression {
    /// Wrap a raw expression.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The expression exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the expression into its region name and coordinate tokens.
    pub fn parse(&self) -> ParsedLocation {
        parse_location(&self.0)
    }
}

impl From<&str> for LocationExpression {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for LocationExpression {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for LocationExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The tokens of a location expression, before any numeric interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLocation {
    /// Region (sequence) name, empty when the expression was malformed.
    pub region_name: String,
    /// Start coordinate token with thousands separators removed.
    pub start_token: Option<String>,
    /// End coordinate token with thousands separators removed.
    pub end_token: Option<String>,
}

impl ParsedLocation {
    /// The degraded form produced for malformed expressions.
    pub fn degraded() -> Self {
        Self {
            region_name: String::new(),
            start_token: Some(DEFAULT_START_TOKEN.to_string()),
            end_token: None,
        }
    }

    /// Start token, falling back to [`DEFAULT_START_TOKEN`].
    pub fn start_token(&self) -> &str {
        self.start_token.as_deref().unwrap_or(DEFAULT_START_TOKEN)
    }

    /// End token, if one was given. An absent end resolves to the region length.
    pub fn end_token(&self) -> Option<&str> {
        self.end_token.as_deref()
    }

    /// Whether parsing fell back to the degraded form.
    pub fn is_degraded(&self) -> bool {
        *self == Self::degraded()
    }
}

/// Parse a raw `name:start-end` expression.
///
/// Only the first `':'` separates the name from the span. The span must split
/// on `'-'` into exactly two tokens and must not contain another `':'`.
/// Commas are stripped from both tokens. Never fails.
pub fn parse_location(raw: &str) -> ParsedLocation {
    let Some((region_name, span)) = raw.split_once(':') else {
        tracing::debug!(location = raw, "location has no ':' separator");
        return ParsedLocation::degraded();
    };

    if span.contains(':') {
        tracing::debug!(location = raw, "location span contains a second ':'");
        return ParsedLocation::degraded();
    }

    let mut tokens = span.split('-');
    let (Some(start), Some(end), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        tracing::debug!(location = raw, "location span is not of the form start-end");
        return ParsedLocation::degraded();
    };

    ParsedLocation {
        region_name: region_name.to_string(),
        start_token: Some(strip_separators(start)),
        end_token: Some(strip_separators(end)),
    }
}

fn strip_separators(token: &str) -> String {
    token.replace(',', "")
}

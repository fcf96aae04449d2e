//! Parsing of free-text genomic location expressions.

mod parser;

pub use parser::{parse_location, LocationExpression, ParsedLocation, DEFAULT_START_TOKEN};

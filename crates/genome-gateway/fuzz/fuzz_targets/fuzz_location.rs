//! Fuzz target for the location parser.
//!
//! This fuzzer tests that parsing:
//! 1. Never panics on any input
//! 2. Never leaves thousands separators in coordinate tokens
//! 3. Only drops the end token on a degraded parse

#![no_main]

use genome_gateway::{parse_location, LocationExpression};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let parsed = parse_location(&input);

    assert!(!parsed.start_token().contains(','));
    if let Some(end) = parsed.end_token() {
        assert!(!end.contains(','));
    }
    if parsed.end_token().is_none() {
        assert!(parsed.is_degraded());
    }

    // Wrapping must not change what is parsed
    let expression = LocationExpression::new(input.as_ref());
    assert_eq!(expression.parse(), parsed);
});

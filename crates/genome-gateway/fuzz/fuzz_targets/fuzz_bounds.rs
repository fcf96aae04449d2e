//! Fuzz target for the start/end bound checks.

#![no_main]

use arbitrary::Arbitrary;
use genome_gateway::validation::{check_end, check_start};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct BoundsInput<'a> {
    start: &'a str,
    end: Option<&'a str>,
    length: u64,
}

fuzz_target!(|input: BoundsInput<'_>| {
    let start = check_start(input.start, input.length);

    if let Some(start_value) = start.valid_integer() {
        assert!(start_value > 0 && start_value < input.length);

        let end = check_end(input.end, start_value, input.length);
        if let Some(end_value) = end.valid_integer() {
            assert!(end_value > start_value && end_value <= input.length);
        }
    } else {
        assert!(start.error_message().is_some());
    }
});

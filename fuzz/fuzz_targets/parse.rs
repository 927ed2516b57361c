#![no_main]
use libfuzzer_sys::fuzz_target;

use canon_json::{parse, serialize};

fuzz_target!(|data: &[u8]| {
    // Only UTF-8 input reaches the parser.
    if let Ok(s) = std::str::from_utf8(data) {
        // Anything that parses must survive a canonical round trip.
        if let Ok(value) = parse(s) {
            let text = serialize(&value);
            let again = parse(&text).expect("canonical output must parse");
            assert_eq!(again, value, "round trip changed {text}");
        }
    }
});

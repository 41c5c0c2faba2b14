#![no_main]

use libfuzzer_sys::fuzz_target;
use dockbench::value::parse_value;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Any cell text is either rejected or a finite number
        if let Some(v) = parse_value(input) {
            assert!(v.is_finite());
        }
    }
});

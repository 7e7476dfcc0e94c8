#![no_main]
use libfuzzer_sys::fuzz_target;
use mxoxide::codegen::{generate, GenerateOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Malformed markup is recovered from, never a panic
        let _ = generate(s, "Fuzzed", &GenerateOptions::default());
        let _ = generate(s, "Fuzzed", &GenerateOptions::default().fragment(true));
    }
});

#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must lex to tokens or a LexError, never a panic.
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = coolfront::parse_source(s);
    }
});

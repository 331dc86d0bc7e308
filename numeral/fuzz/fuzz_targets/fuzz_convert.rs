#![no_main]

use libfuzzer_sys::fuzz_target;
use numeral::Engine;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let engine = Engine::new();

        let result = engine.convert(s);
        assert_eq!(result.has_errors, !result.error_messages.is_empty());
    }
});

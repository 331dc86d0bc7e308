#![no_main]

use libfuzzer_sys::fuzz_target;
use numeral::Engine;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let outcome = Engine::new().validate(s);

        for issue in &outcome.issues {
            if let Some(span) = issue.span {
                // spans must cut the normalized text on char boundaries
                let _ = &outcome.normalized[span.range()];
            }
        }
    }
});

#![no_main]
use libfuzzer_sys::fuzz_target;

use emojib::Builder;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mut builder = Builder::new();
        for (i, line) in text.lines().enumerate() {
            builder.feed_line("fuzz", i + 1, line);
        }
        let _ = builder.finish();
    }
});

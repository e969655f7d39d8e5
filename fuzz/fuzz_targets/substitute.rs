#![no_main]
use libfuzzer_sys::fuzz_target;

use emojib::{lookup::SHORTCODE_PATTERN, Table};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let table = Table::from_static(&[(":wave:", r"\U0001F44B"), (":+1:", r"\U0001F44D")]);
        let out = table.substitute(text);
        if !regex::Regex::new(SHORTCODE_PATTERN).unwrap().is_match(text) {
            assert_eq!(out, text);
        }
        let _ = table.emojify(text);
    }
});

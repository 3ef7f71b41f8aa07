#![no_main]

use libfuzzer_sys::fuzz_target;
use pdf_bootstrap::parser::{ParseOptions, Parser};
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Parsing must fail gracefully on arbitrary input
    if let Ok(mut parser) = Parser::new(Cursor::new(data)) {
        let _ = parser.parse();
    }

    // A window smaller than the markers must not panic either
    if let Some(&first) = data.first() {
        let options = ParseOptions::default().with_trailer_window(u64::from(first) + 1);
        if let Ok(mut parser) = Parser::with_options(Cursor::new(data), options) {
            let _ = parser.parse();
        }
    }
});

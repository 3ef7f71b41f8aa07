#![no_main]

use libfuzzer_sys::fuzz_target;
use pdf_bootstrap::parser::LineReader;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    let mut total = 0;
    for line in LineReader::new(Cursor::new(data)) {
        match line {
            Ok(line) => {
                assert!(!line.is_empty());
                total += line.len();
            }
            Err(_) => break,
        }
    }
    // Lines never overlap or invent bytes
    assert!(total <= data.len());
});

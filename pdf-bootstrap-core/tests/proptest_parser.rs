//! Property-based tests for the bootstrap parser
//!
//! Tests that the parser handles all valid inputs correctly and
//! fails gracefully on invalid inputs without panicking.

use pdf_bootstrap::parser::{LineReader, ParseError, Parser};
use pdf_bootstrap::PdfVersion;
use proptest::prelude::*;
use std::io::Cursor;

// Strategy for line terminators
fn eol_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("\n"), Just("\r"), Just("\r\n")]
}

// Strategy for line content that contains no terminator
fn line_content_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>().prop_filter("no EOL", |b| *b != b'\r' && *b != b'\n'), 0..80)
}

fn document(version: &str, filler: usize, offset: i64) -> Vec<u8> {
    let mut pdf = format!("%PDF-{version}\n").into_bytes();
    pdf.extend(std::iter::repeat(b'.').take(filler));
    pdf.extend_from_slice(format!("\nstartxref\n{offset}\n%%EOF\n").as_bytes());
    pdf
}

proptest! {
    #[test]
    fn test_two_lines_round_trip(
        first in line_content_strategy(),
        first_eol in eol_strategy(),
        second in line_content_strategy(),
        second_eol in eol_strategy(),
    ) {
        let mut input = first.clone();
        input.extend_from_slice(first_eol.as_bytes());
        input.extend_from_slice(&second);
        input.extend_from_slice(second_eol.as_bytes());
        // A trailing CR needs one more byte to be told apart from CRLF
        input.push(b'!');

        // An empty first line ending in CR followed by an LF-started second
        // line would read back as a single CRLF.
        prop_assume!(!(first_eol == "\r" && second.is_empty() && second_eol.starts_with('\n')));

        let mut reader = LineReader::new(Cursor::new(input));
        let mut expected_first = first.clone();
        expected_first.extend_from_slice(first_eol.as_bytes());
        let mut expected_second = second.clone();
        expected_second.extend_from_slice(second_eol.as_bytes());

        prop_assert_eq!(reader.read_line().unwrap().into_bytes(), expected_first);
        prop_assert_eq!(reader.read_line().unwrap().into_bytes(), expected_second);
    }

    #[test]
    fn test_supported_versions_parse_exactly(major in 0u8..=1, minor in 0u8..=9) {
        prop_assume!(PdfVersion::new(major, minor) <= PdfVersion::MAX_SUPPORTED);
        let text = format!("{major}.{minor}");
        let mut parser = Parser::new(Cursor::new(document(&text, 10, 5))).unwrap();

        let parsed = parser.parse().unwrap();
        prop_assert_eq!(parsed.version(), Some(text.parse::<f32>().unwrap()));
        prop_assert_eq!(parsed.pdf_version(), Some(PdfVersion::new(major, minor)));
    }

    #[test]
    fn test_future_versions_are_rejected(major in 1u8..=9, minor in 0u8..=9) {
        prop_assume!(PdfVersion::new(major, minor) > PdfVersion::MAX_SUPPORTED);
        let text = format!("{major}.{minor}");
        let mut parser = Parser::new(Cursor::new(document(&text, 10, 5))).unwrap();

        let is_unsupported = matches!(
            parser.parse(),
            Err(ParseError::UnsupportedVersion { .. })
        );
        prop_assert!(is_unsupported);
    }

    #[test]
    fn test_offset_found_for_any_filler(filler in 0usize..4096, offset in 0i64..i64::MAX) {
        let mut parser = Parser::new(Cursor::new(document("1.4", filler, offset))).unwrap();
        prop_assert_eq!(parser.parse().unwrap().start_xref_offset(), Some(offset));
    }

    #[test]
    fn test_arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        let mut parser = Parser::new(Cursor::new(data)).unwrap();
        let _ = parser.parse();
    }

    #[test]
    fn test_bad_first_line_leaves_version_unset(
        line in "[a-zA-Z0-9 ]{0,40}",
    ) {
        prop_assume!(!line.contains("PDF"));
        let mut pdf = format!("{line}\n").into_bytes();
        pdf.extend_from_slice(b"startxref\n1\n%%EOF");

        let mut parser = Parser::new(Cursor::new(pdf)).unwrap();
        let is_invalid_header = matches!(parser.parse(), Err(ParseError::InvalidHeader));
        prop_assert!(is_invalid_header);
        prop_assert_eq!(parser.document().version(), None);
    }
}

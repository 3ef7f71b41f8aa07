//! Invalid PDF Generators
//!
//! Generates deliberately broken PDFs for error handling tests.

use super::test_pdf_builder::TestPdfBuilder;
use super::{write_cases, GeneratedCase};
use anyhow::Result;
use pdf_bootstrap::PdfVersion;
use std::path::Path;

/// Generate all invalid test PDFs
pub fn generate_all<P: AsRef<Path>>(output_dir: P) -> Result<Vec<GeneratedCase>> {
    let cases = cases();
    write_cases(output_dir.as_ref(), &cases)?;
    Ok(cases)
}

/// Every invalid case, in memory
pub fn cases() -> Vec<GeneratedCase> {
    let mut cases = Vec::new();

    // Header problems
    cases.push(GeneratedCase::invalid(
        "no_header",
        "First line carries no %PDF- signature",
        None,
        "Format",
        TestPdfBuilder::minimal()
            .with_header_line("%!PS-Adobe-3.0")
            .build()
            .bytes,
    ));

    cases.push(GeneratedCase::invalid(
        "header_on_second_line",
        "Signature present, but not on the first line",
        None,
        "Format",
        TestPdfBuilder::minimal()
            .with_header_line("garbage\n%PDF-1.4")
            .build()
            .bytes,
    ));

    cases.push(GeneratedCase::invalid(
        "future_version",
        "Version above the supported maximum",
        None,
        "UnsupportedVersion",
        TestPdfBuilder::minimal()
            .with_version(PdfVersion::new(2, 1))
            .build()
            .bytes,
    ));

    cases.push(GeneratedCase::invalid(
        "empty",
        "Zero-length file",
        None,
        "Io",
        Vec::new(),
    ));

    cases.push(GeneratedCase::invalid(
        "truncated_header",
        "Header line without a terminator",
        None,
        "Io",
        b"%PDF-1.4".to_vec(),
    ));

    // Trailer problems; the header is fine, so the version is still reported
    cases.push(GeneratedCase::invalid(
        "no_eof",
        "File ends without a %%EOF marker",
        Some("1.4"),
        "Format",
        TestPdfBuilder::minimal().without_eof_marker().build().bytes,
    ));

    cases.push(GeneratedCase::invalid(
        "no_startxref",
        "%%EOF present but no startxref before it",
        Some("1.4"),
        "Format",
        TestPdfBuilder::minimal().without_startxref().build().bytes,
    ));

    cases.push(GeneratedCase::invalid(
        "bad_startxref_offset",
        "startxref is followed by text that is not an integer",
        Some("1.4"),
        "Format",
        TestPdfBuilder::minimal()
            .with_startxref_text("twelve")
            .build()
            .bytes,
    ));

    cases.push(GeneratedCase::invalid(
        "eof_beyond_window",
        "Too much padding after %%EOF for the default trailer window",
        Some("1.4"),
        "Format",
        TestPdfBuilder::minimal()
            .with_trailing_padding(2048)
            .build()
            .bytes,
    ));

    cases
}

//! Minimal PDF Generators
//!
//! Generates small well-formed PDFs covering the header and trailer layouts
//! a reader meets in practice.

use super::test_pdf_builder::TestPdfBuilder;
use super::{write_cases, GeneratedCase};
use anyhow::Result;
use pdf_bootstrap::parser::LineEnding;
use pdf_bootstrap::PdfVersion;
use std::path::Path;

/// Generate all minimal test PDFs
pub fn generate_all<P: AsRef<Path>>(output_dir: P) -> Result<Vec<GeneratedCase>> {
    let cases = cases();
    write_cases(output_dir.as_ref(), &cases)?;
    Ok(cases)
}

/// Every minimal case, in memory
pub fn cases() -> Vec<GeneratedCase> {
    let mut cases = Vec::new();

    // Every version from 1.0 to 1.7
    for minor in 0..=7 {
        let version = PdfVersion::new(1, minor);
        cases.push(GeneratedCase::valid(
            &format!("minimal_v1_{minor}"),
            &format!("Minimal PDF declaring version {version}"),
            &version.to_string(),
            TestPdfBuilder::minimal().with_version(version).build(),
        ));
    }

    for (name, ending) in [
        ("minimal_cr", LineEnding::Cr),
        ("minimal_crlf", LineEnding::CrLf),
    ] {
        cases.push(GeneratedCase::valid(
            name,
            &format!("Minimal PDF using {ending:?} line endings"),
            "1.4",
            TestPdfBuilder::minimal().with_line_ending(ending).build(),
        ));
    }

    cases.push(GeneratedCase::valid(
        "minimal_no_binary_marker",
        "Minimal PDF without the binary comment line",
        "1.4",
        TestPdfBuilder::minimal().with_binary_marker(false).build(),
    ));

    cases.push(GeneratedCase::valid(
        "incremental_updates",
        "Three revisions; the last startxref wins",
        "1.6",
        TestPdfBuilder::minimal()
            .with_version(PdfVersion::new(1, 6))
            .with_incremental_updates(2)
            .build(),
    ));

    cases.push(GeneratedCase::valid(
        "large_body",
        "One megabyte of filler between the header and the trailer",
        "1.5",
        TestPdfBuilder::minimal()
            .with_version(PdfVersion::new(1, 5))
            .with_filler(1024 * 1024)
            .build(),
    ));

    cases.push(GeneratedCase::valid(
        "trailing_padding",
        "Blank lines after %%EOF that still fit in the trailer window",
        "1.4",
        TestPdfBuilder::minimal().with_trailing_padding(200).build(),
    ));

    cases
}

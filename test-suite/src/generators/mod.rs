//! PDF Test Generators
//!
//! This module provides utilities for generating test PDFs programmatically,
//! each paired with the result the bootstrap parser is expected to produce.

pub mod invalid_pdfs;
pub mod minimal_pdfs;
pub mod test_pdf_builder;

pub use test_pdf_builder::{BuiltPdf, TestPdfBuilder};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What parsing a generated PDF should yield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expected {
    pub version: Option<String>,
    pub startxref: Option<i64>,
    /// `ErrorKind` name when parsing should fail
    pub error: Option<String>,
}

/// Description written next to every generated PDF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestMetadata {
    pub name: String,
    pub description: String,
    pub expected: Expected,
}

/// A generated PDF and its metadata
#[derive(Debug, Clone)]
pub struct GeneratedCase {
    pub metadata: TestMetadata,
    pub bytes: Vec<u8>,
}

impl GeneratedCase {
    pub fn valid(name: &str, description: &str, version: &str, pdf: BuiltPdf) -> Self {
        Self {
            metadata: TestMetadata {
                name: name.to_string(),
                description: description.to_string(),
                expected: Expected {
                    version: Some(version.to_string()),
                    startxref: Some(pdf.last_xref_offset()),
                    error: None,
                },
            },
            bytes: pdf.bytes,
        }
    }

    pub fn invalid(
        name: &str,
        description: &str,
        version: Option<&str>,
        error: &str,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            metadata: TestMetadata {
                name: name.to_string(),
                description: description.to_string(),
                expected: Expected {
                    version: version.map(str::to_string),
                    startxref: None,
                    error: Some(error.to_string()),
                },
            },
            bytes,
        }
    }
}

/// Write `<name>.pdf` and `<name>.json` for every case into `output_dir`
pub fn write_cases(output_dir: &Path, cases: &[GeneratedCase]) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    for case in cases {
        let pdf_path = output_dir.join(format!("{}.pdf", case.metadata.name));
        fs::write(&pdf_path, &case.bytes)?;

        let json_path = output_dir.join(format!("{}.json", case.metadata.name));
        fs::write(&json_path, serde_json::to_string_pretty(&case.metadata)?)?;
    }

    Ok(())
}

/// Read back the metadata written by [`write_cases`]
pub fn read_metadata(path: &Path) -> Result<TestMetadata> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

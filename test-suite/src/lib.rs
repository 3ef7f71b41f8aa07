//! Test Suite for pdf-bootstrap
//!
//! Generators for valid and broken PDFs, each carrying the result the
//! bootstrap parser should produce, plus helpers to check a parse against
//! those expectations.

pub mod generators;

pub use generators::{Expected, GeneratedCase, TestMetadata, TestPdfBuilder};

/// Common test utilities
pub mod utils {
    use crate::generators::Expected;
    use pdf_bootstrap::parser::Parser;
    use std::io::Cursor;
    use std::path::PathBuf;

    /// Get the path to the test fixtures directory
    pub fn fixtures_dir() -> PathBuf {
        let manifest_dir = env!("CARGO_MANIFEST_DIR");
        PathBuf::from(manifest_dir).join("fixtures")
    }

    /// Create a temporary directory for test outputs
    pub fn create_test_output_dir() -> anyhow::Result<tempfile::TempDir> {
        Ok(tempfile::tempdir()?)
    }

    /// Parse `bytes` with default options and describe the outcome in the
    /// same shape as the generator metadata.
    pub fn observe(bytes: &[u8]) -> Expected {
        let mut parser = match Parser::new(Cursor::new(bytes)) {
            Ok(parser) => parser,
            Err(e) => {
                return Expected {
                    version: None,
                    startxref: None,
                    error: Some(format!("{:?}", e.kind())),
                }
            }
        };

        let error = parser.parse().err().map(|e| format!("{:?}", e.kind()));
        let document = parser.document();
        Expected {
            version: document.pdf_version().map(|v| v.to_string()),
            startxref: document.start_xref_offset(),
            error,
        }
    }
}

//! Generate Test PDFs
//!
//! This binary writes every generated test PDF, with its JSON metadata, to
//! `fixtures/` (or the directory given as the first argument).

use anyhow::Result;
use pdf_bootstrap_test_suite::generators::{invalid_pdfs, minimal_pdfs};
use pdf_bootstrap_test_suite::utils::fixtures_dir;
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("Generating test PDFs for the pdf-bootstrap test suite...");

    let fixtures_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(fixtures_dir);

    let valid_dir = fixtures_dir.join("valid");
    println!("Generating valid PDFs in {:?}...", valid_dir);
    let valid = minimal_pdfs::generate_all(&valid_dir)?;

    let invalid_dir = fixtures_dir.join("invalid");
    println!("Generating invalid PDFs in {:?}...", invalid_dir);
    let invalid = invalid_pdfs::generate_all(&invalid_dir)?;

    println!(
        "Test PDF generation complete! {} valid, {} invalid",
        valid.len(),
        invalid.len()
    );
    Ok(())
}

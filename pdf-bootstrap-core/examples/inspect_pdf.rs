//! PDF Bootstrap Inspection
//!
//! Prints the header version and startxref offset of every PDF in a
//! directory, then a summary of the failures grouped by error kind.
//!
//! Usage: cargo run --example inspect_pdf -- <directory>

use pdf_bootstrap::parser::Parser;
use pdf_bootstrap::ErrorKind;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    println!("PDF Bootstrap Inspection");
    println!("========================\n");

    let mut pdf_files = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("pdf") {
            pdf_files.push(path);
        }
    }
    pdf_files.sort();
    println!("Found {} PDF files in {}\n", pdf_files.len(), dir.display());

    let start = Instant::now();
    let mut failures: HashMap<ErrorKind, usize> = HashMap::new();

    for path in &pdf_files {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        let result = Parser::open(path).and_then(|mut parser| parser.parse().cloned());

        match result {
            Ok(document) => {
                let version = document
                    .pdf_version()
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                let offset = document.start_xref_offset().unwrap_or_default();
                println!("✓ {name}: PDF {version}, startxref {offset}");
            }
            Err(e) => {
                println!("✗ {name}: {e}");
                *failures.entry(e.kind()).or_default() += 1;
            }
        }
    }

    let failed: usize = failures.values().sum();
    println!("\nSummary");
    println!("-------");
    println!("Parsed: {}", pdf_files.len() - failed);
    println!("Failed: {failed}");
    for (kind, count) in &failures {
        println!("  {kind:?}: {count}");
    }
    println!("Elapsed: {:.2?}", start.elapsed());

    Ok(())
}

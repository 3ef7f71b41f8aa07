//! # pdf-bootstrap
//!
//! Finds where structural parsing of a PDF has to start: the `%PDF-x.y`
//! version header and the cross-reference offset written after `startxref` at
//! the end of the file. Only the first line and a bounded window at the end of
//! the file are read, so arbitrarily large documents can be inspected through
//! any seekable source.
//!
//! ## Quick Start
//!
//! ```rust
//! use pdf_bootstrap::parser::Parser;
//! use std::io::Cursor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pdf = b"%PDF-1.4\n".to_vec();
//! pdf.extend_from_slice(b"1 0 obj\n<< /Type /Catalog >>\nendobj\n");
//! pdf.extend_from_slice(b"startxref\n42\n%%EOF");
//!
//! let mut parser = Parser::new(Cursor::new(pdf))?;
//! let document = parser.parse()?;
//!
//! println!("Version: {:?}", document.version());
//! println!("startxref: {:?}", document.start_xref_offset());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`parser`] - Byte sources, line reading, header and trailer scanning
//!   - [`parser::Parser`] - Runs both scans over one source
//!   - [`parser::ByteSource`] - Sequential, seekable and positional reads
//!   - [`parser::LineReader`] - CR / LF / CRLF aware line splitting
//! - [`document`] - The parse result

pub mod document;
pub mod parser;

pub use document::Document;
pub use parser::{
    ByteSource, ErrorKind, ParseError, ParseOptions, ParseResult, ParseState, Parser, PdfVersion,
};

/// Current version of pdf-bootstrap
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

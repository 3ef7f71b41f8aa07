//! High-level bootstrap API
//!
//! [`Parser`] ties a byte source to the header and trailer scanners and
//! collects their results in a [`Document`].

use super::header::parse_header;
use super::source::ByteSource;
use super::trailer::locate_startxref;
use super::{ParseOptions, ParseResult};
use crate::document::Document;
use std::fs::File;
use std::io::SeekFrom;
use std::path::Path;

/// Where a [`Parser`] is in its life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Constructed, `parse` not yet called
    Initialized,
    /// Header and trailer were both located
    Completed,
    /// The last `parse` call returned an error
    Failed,
}

/// Locates the header version and `startxref` offset of a PDF.
///
/// The total length of the source is measured once, when the parser is
/// created, by seeking to its end.
pub struct Parser<S: ByteSource> {
    source: S,
    length: u64,
    options: ParseOptions,
    document: Document,
    state: ParseState,
}

impl Parser<File> {
    /// Open a PDF file from a path
    pub fn open<P: AsRef<Path>>(path: P) -> ParseResult<Self> {
        let file = File::open(path)?;
        Self::new(file)
    }
}

impl<S: ByteSource> Parser<S> {
    /// Create a parser with default options
    pub fn new(source: S) -> ParseResult<Self> {
        Self::with_options(source, ParseOptions::default())
    }

    /// Create a parser with custom options
    pub fn with_options(mut source: S, options: ParseOptions) -> ParseResult<Self> {
        let length = source.seek(SeekFrom::End(0))?;
        tracing::debug!("Source length is {} bytes", length);

        Ok(Self {
            source,
            length,
            options,
            document: Document::new(),
            state: ParseState::Initialized,
        })
    }

    /// Parse the header, then the trailer offset.
    ///
    /// Stops at the first failure and returns it unchanged. Anything recorded
    /// before the failure stays in the document. Calling `parse` again starts
    /// over with an empty document.
    pub fn parse(&mut self) -> ParseResult<&Document> {
        self.document = Document::new();

        match self.run() {
            Ok(()) => {
                self.state = ParseState::Completed;
                Ok(&self.document)
            }
            Err(e) => {
                tracing::debug!("Parse failed: {}", e);
                self.state = ParseState::Failed;
                Err(e)
            }
        }
    }

    fn run(&mut self) -> ParseResult<()> {
        self.options.validate()?;

        let version = parse_header(&mut self.source, &self.options)?;
        self.document.set_version(version);

        let offset = locate_startxref(&mut self.source, self.length, &self.options)?;
        self.document.set_start_xref_offset(offset);

        Ok(())
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Total length of the source in bytes
    pub fn len(&self) -> u64 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Give the byte source back to the caller
    pub fn into_inner(self) -> S {
        self.source
    }
}

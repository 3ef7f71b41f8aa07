//! PDF Bootstrap Parser Module
//!
//! This module finds the two anchors every later stage of a PDF parser needs:
//! the `%PDF-x.y` version header at the start of the file and the byte offset
//! recorded after the `startxref` keyword at its end (ISO 32000-1 Sections
//! 7.5.2 and 7.5.5). Both are located with bounded, random-access reads so the
//! whole file never has to be buffered.

pub mod header;
pub mod line_reader;
pub mod reader;
pub mod source;
pub mod trailer;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use self::header::PdfVersion;
pub use self::line_reader::{Line, LineEnding, LineReader};
pub use self::reader::{ParseState, Parser};
pub use self::source::{ByteSource, SeekingSource};

use std::num::ParseIntError;

/// Default header signature preceding the `major.minor` version digits
pub const DEFAULT_HEADER_SIGNATURE: &str = "%PDF-";

/// Default number of trailing bytes searched for the trailer markers
pub const DEFAULT_TRAILER_WINDOW: u64 = 1024;

/// End-of-file marker closing a well-formed document
pub const EOF_MARKER: &[u8] = b"%%EOF";

/// Keyword preceding the cross-reference offset
pub const STARTXREF_MARKER: &[u8] = b"startxref";

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

/// PDF Parser errors
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot find PDF header")]
    InvalidHeader,

    #[error("invalid PDF version number '{text}'")]
    InvalidVersion { text: String },

    #[error("PDF version exceeds maximum {max}: found {found}")]
    UnsupportedVersion { max: PdfVersion, found: PdfVersion },

    #[error("cannot find PDF end-of-file marker ('{marker}')")]
    MissingEofMarker { marker: String },

    #[error("cannot find PDF startxref marker")]
    MissingStartXRef,

    #[error("invalid startxref offset '{text}': {source}")]
    InvalidXRefOffset {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid parse options: {0}")]
    InvalidOptions(String),
}

/// Coarse classification of a [`ParseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The byte source failed to read or seek
    Io,
    /// A structural expectation about the document was violated
    Format,
    /// The document declares a version newer than the configured maximum
    UnsupportedVersion,
}

impl ParseError {
    /// Classify the error so callers can special-case future-format documents
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Io(_) => ErrorKind::Io,
            ParseError::UnsupportedVersion { .. } => ErrorKind::UnsupportedVersion,
            ParseError::InvalidHeader
            | ParseError::InvalidVersion { .. }
            | ParseError::MissingEofMarker { .. }
            | ParseError::MissingStartXRef
            | ParseError::InvalidXRefOffset { .. }
            | ParseError::InvalidOptions(_) => ErrorKind::Format,
        }
    }

    /// Whether the error describes malformed document structure
    pub fn is_format_error(&self) -> bool {
        self.kind() == ErrorKind::Format
    }
}

/// Options controlling how the header and trailer are located
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOptions {
    /// Literal text that precedes the version digits on the first line
    pub header_signature: String,
    /// Highest accepted header version
    pub max_version: PdfVersion,
    /// How many bytes from the end of the source are searched for the markers
    pub trailer_window: u64,
    /// Token closing the document
    pub eof_marker: Vec<u8>,
    /// Token followed by the cross-reference offset line
    pub startxref_marker: Vec<u8>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            header_signature: DEFAULT_HEADER_SIGNATURE.to_string(),
            max_version: PdfVersion::MAX_SUPPORTED,
            trailer_window: DEFAULT_TRAILER_WINDOW,
            eof_marker: EOF_MARKER.to_vec(),
            startxref_marker: STARTXREF_MARKER.to_vec(),
        }
    }
}

impl ParseOptions {
    /// Accept headers up to and including `version`
    pub fn with_max_version(mut self, version: PdfVersion) -> Self {
        self.max_version = version;
        self
    }

    /// Search the last `window` bytes for the trailer markers
    pub fn with_trailer_window(mut self, window: u64) -> Self {
        self.trailer_window = window;
        self
    }

    /// Reject option values that would make the scan meaningless
    pub fn validate(&self) -> ParseResult<()> {
        if self.header_signature.is_empty() {
            return Err(ParseError::InvalidOptions(
                "header signature must not be empty".to_string(),
            ));
        }
        if self.trailer_window == 0 {
            return Err(ParseError::InvalidOptions(
                "trailer window must be at least one byte".to_string(),
            ));
        }
        if usize::try_from(self.trailer_window).is_err() {
            return Err(ParseError::InvalidOptions(format!(
                "trailer window of {} bytes does not fit in memory",
                self.trailer_window
            )));
        }
        if self.eof_marker.is_empty() || self.startxref_marker.is_empty() {
            return Err(ParseError::InvalidOptions(
                "trailer markers must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

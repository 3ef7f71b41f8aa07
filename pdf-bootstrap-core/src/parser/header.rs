//! PDF Header Parser
//!
//! Parses the PDF header and version according to ISO 32000-1 Section 7.5.2

use super::line_reader::LineReader;
use super::source::ByteSource;
use super::{ParseError, ParseOptions, ParseResult, DEFAULT_HEADER_SIGNATURE};
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use std::io::SeekFrom;

lazy_static! {
    static ref DEFAULT_HEADER_PATTERN: Regex = header_pattern(DEFAULT_HEADER_SIGNATURE)
        .expect("default header pattern is a valid regex");
}

fn header_pattern(signature: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"{}(\d)\.(\d)", regex::escape(signature)))
}

/// PDF Version information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PdfVersion {
    pub major: u8,
    pub minor: u8,
}

impl PdfVersion {
    /// Highest version accepted by default
    pub const MAX_SUPPORTED: PdfVersion = PdfVersion::new(1, 7);

    /// Create a new PDF version
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// The version as the decimal number written in the header
    pub fn as_f32(&self) -> f32 {
        // A single correctly rounded division yields the same value as
        // parsing the "major.minor" text.
        f32::from(u16::from(self.major) * 10 + u16::from(self.minor)) / 10.0
    }
}

impl std::fmt::Display for PdfVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl std::str::FromStr for PdfVersion {
    type Err = ParseError;

    /// Parse `"d.d"`, e.g. `"1.7"` or `"2.0"`: one ASCII digit on each side
    /// of the dot, as in a header.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().as_bytes() {
            &[major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => {
                Ok(PdfVersion::new(major - b'0', minor - b'0'))
            }
            _ => Err(ParseError::InvalidVersion {
                text: s.to_string(),
            }),
        }
    }
}

/// Read the first line of `source` and extract its `major.minor` version.
///
/// The source is rewound to offset 0 first, whatever its current position.
pub fn parse_header<S: ByteSource + ?Sized>(
    source: &mut S,
    options: &ParseOptions,
) -> ParseResult<PdfVersion> {
    source.seek(SeekFrom::Start(0))?;

    let line = LineReader::new(&mut *source).read_line()?;
    let text = line.to_string_lossy();

    let pattern: Cow<'_, Regex> = if options.header_signature == DEFAULT_HEADER_SIGNATURE {
        Cow::Borrowed(&*DEFAULT_HEADER_PATTERN)
    } else {
        Cow::Owned(
            header_pattern(&options.header_signature)
                .map_err(|e| ParseError::InvalidOptions(e.to_string()))?,
        )
    };

    let captures = pattern.captures(&text).ok_or(ParseError::InvalidHeader)?;
    let version = parse_version(&captures[1], &captures[2])?;
    tracing::debug!("Found PDF header version {}", version);

    if version > options.max_version {
        return Err(ParseError::UnsupportedVersion {
            max: options.max_version,
            found: version,
        });
    }

    Ok(version)
}

fn parse_version(major: &str, minor: &str) -> ParseResult<PdfVersion> {
    let invalid = || ParseError::InvalidVersion {
        text: format!("{major}.{minor}"),
    };
    let major = major.parse::<u8>().map_err(|_| invalid())?;
    let minor = minor.parse::<u8>().map_err(|_| invalid())?;
    Ok(PdfVersion::new(major, minor))
}

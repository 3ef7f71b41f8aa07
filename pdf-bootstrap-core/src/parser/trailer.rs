//! PDF Trailer Locator
//!
//! Finds the cross-reference offset recorded at the end of a PDF file
//! according to ISO 32000-1 Section 7.5.5:
//!
//! ```text
//! startxref
//! <byte offset of the last cross-reference section>
//! %%EOF
//! ```

use super::line_reader::LineReader;
use super::source::ByteSource;
use super::{ParseError, ParseOptions, ParseResult};

/// Locate the `startxref` offset within the last `options.trailer_window`
/// bytes of a source that is `length` bytes long.
///
/// The pairing closest to the final end-of-file marker wins, so stale marker
/// pairs left behind by incremental updates are ignored. The returned offset
/// is not checked against the file contents.
pub fn locate_startxref<S: ByteSource + ?Sized>(
    source: &mut S,
    length: u64,
    options: &ParseOptions,
) -> ParseResult<i64> {
    let skip = length.saturating_sub(options.trailer_window);
    let window_len = usize::try_from(length - skip).map_err(|_| {
        ParseError::InvalidOptions(format!(
            "trailer window of {} bytes does not fit in memory",
            options.trailer_window
        ))
    })?;
    tracing::trace!("Scanning trailer window {}..{}", skip, length);

    let mut window = vec![0u8; window_len];
    source.read_exact_at(&mut window, skip)?;

    let eof_pos = rfind(&window, &options.eof_marker).ok_or_else(|| {
        ParseError::MissingEofMarker {
            marker: String::from_utf8_lossy(&options.eof_marker).into_owned(),
        }
    })?;
    let startxref_pos = rfind(&window[..eof_pos], &options.startxref_marker)
        .ok_or(ParseError::MissingStartXRef)?;
    tracing::trace!(
        "Found startxref at {} and end-of-file marker at {}",
        skip + startxref_pos as u64,
        skip + eof_pos as u64
    );

    // The first line is the marker itself, the offset is on the next one.
    let mut lines = LineReader::new(&window[startxref_pos..]);
    lines.read_line()?;
    let line = lines.read_line()?;

    let text = String::from_utf8_lossy(line.trim_eol());
    let offset = text
        .parse::<i64>()
        .map_err(|source| ParseError::InvalidXRefOffset {
            text: text.to_string(),
            source,
        })?;
    tracing::debug!("Found startxref offset {}", offset);

    Ok(offset)
}

/// Position of the last occurrence of `needle` in `haystack`
fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .rposition(|candidate| candidate == needle)
}

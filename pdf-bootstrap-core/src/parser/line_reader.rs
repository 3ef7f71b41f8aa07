//! Line-oriented reading over raw PDF bytes
//!
//! PDF allows CR, LF and CRLF as end-of-line markers (ISO 32000-1 Section
//! 7.2.3), and byte offsets inside a file are only meaningful if the exact
//! terminator bytes are preserved. [`LineReader`] returns each line together
//! with its terminator.

use std::borrow::Cow;
use std::io::{self, BufRead, BufReader, Read};

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// End-of-line convention terminating a [`Line`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Bare carriage return
    Cr,
    /// Bare line feed
    Lf,
    /// Carriage return followed by line feed
    CrLf,
}

impl LineEnding {
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            LineEnding::Cr => b"\r",
            LineEnding::Lf => b"\n",
            LineEnding::CrLf => b"\r\n",
        }
    }
}

/// One line of input, including its terminator when one was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Total length in bytes, terminator included
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The terminator this line ended with
    pub fn ending(&self) -> Option<LineEnding> {
        if self.bytes.ends_with(b"\r\n") {
            Some(LineEnding::CrLf)
        } else if self.bytes.ends_with(b"\n") {
            Some(LineEnding::Lf)
        } else if self.bytes.ends_with(b"\r") {
            Some(LineEnding::Cr)
        } else {
            None
        }
    }

    /// Content up to the first CR or LF
    pub fn trim_eol(&self) -> &[u8] {
        match self.bytes.iter().position(|&b| b == CR || b == LF) {
            Some(i) => &self.bytes[..i],
            None => &self.bytes,
        }
    }

    /// Decode the line for pattern matching; PDF headers are ASCII but
    /// arbitrary bytes are tolerated
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Buffered reader that splits its input on CR, LF and CRLF.
///
/// A CR may or may not start a CRLF pair, so after a CR the reader has to look
/// at one more byte. When that byte turns out to start the next line it is
/// kept in a one-byte lookahead slot owned by the reader, so no unread support
/// is required from the underlying stream.
pub struct LineReader<R> {
    inner: BufReader<R>,
    lookahead: Option<u8>,
}

impl<R: Read> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
            lookahead: None,
        }
    }

    /// Unwrap the underlying reader.
    ///
    /// Bytes already buffered or held in the lookahead slot are lost.
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }

    /// Read one line including its terminator.
    ///
    /// Fails with the underlying error (`UnexpectedEof` at end of stream) if
    /// no byte can be read, and also when the stream ends in the middle of a
    /// line; the partial line is dropped in that case.
    pub fn read_line(&mut self) -> io::Result<Line> {
        let mut bytes = Vec::new();

        loop {
            let byte = self.next_byte()?;
            bytes.push(byte);

            match byte {
                CR => {
                    let next = self.next_byte()?;
                    if next == LF {
                        bytes.push(next);
                    } else {
                        self.lookahead = Some(next);
                    }
                    return Ok(Line { bytes });
                }
                LF => return Ok(Line { bytes }),
                _ => {}
            }
        }
    }

    fn next_byte(&mut self) -> io::Result<u8> {
        if let Some(byte) = self.lookahead.take() {
            return Ok(byte);
        }

        let mut byte = [0u8; 1];
        self.inner.read_exact(&mut byte)?;
        Ok(byte[0])
    }

    fn at_end(&mut self) -> io::Result<bool> {
        if self.lookahead.is_some() {
            return Ok(false);
        }
        Ok(self.inner.fill_buf()?.is_empty())
    }
}

/// Yields lines until the stream ends cleanly on a line boundary.
impl<R: Read> Iterator for LineReader<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.at_end() {
            Ok(true) => None,
            Ok(false) => Some(self.read_line()),
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &[u8]) -> LineReader<Cursor<Vec<u8>>> {
        LineReader::new(Cursor::new(input.to_vec()))
    }

    #[test]
    fn test_lf_line() {
        let mut r = reader(b"%PDF-1.4\nnext\n");
        let line = r.read_line().unwrap();

        assert_eq!(line.as_bytes(), b"%PDF-1.4\n");
        assert_eq!(line.ending(), Some(LineEnding::Lf));
        assert_eq!(line.trim_eol(), b"%PDF-1.4");
    }

    #[test]
    fn test_crlf_line() {
        let mut r = reader(b"startxref\r\n1234\r\n");

        let first = r.read_line().unwrap();
        assert_eq!(first.as_bytes(), b"startxref\r\n");
        assert_eq!(first.ending(), Some(LineEnding::CrLf));

        let second = r.read_line().unwrap();
        assert_eq!(second.as_bytes(), b"1234\r\n");
        assert_eq!(second.trim_eol(), b"1234");
    }

    #[test]
    fn test_bare_cr_keeps_next_byte_for_next_line() {
        let mut r = reader(b"startxref\r42\r%%EOF\n");

        let first = r.read_line().unwrap();
        assert_eq!(first.as_bytes(), b"startxref\r");
        assert_eq!(first.ending(), Some(LineEnding::Cr));

        let second = r.read_line().unwrap();
        assert_eq!(second.as_bytes(), b"42\r");

        let third = r.read_line().unwrap();
        assert_eq!(third.as_bytes(), b"%%EOF\n");
    }

    #[test]
    fn test_mixed_line_endings() {
        let mut r = reader(b"a\nb\rc\r\nd\n");
        let lines: Vec<Vec<u8>> = (0..4)
            .map(|_| r.read_line().unwrap().into_bytes())
            .collect();

        assert_eq!(
            lines,
            vec![b"a\n".to_vec(), b"b\r".to_vec(), b"c\r\n".to_vec(), b"d\n".to_vec()]
        );
    }

    #[test]
    fn test_empty_lines() {
        let mut r = reader(b"\n\r\n\rx\n");

        assert_eq!(r.read_line().unwrap().as_bytes(), b"\n");
        assert_eq!(r.read_line().unwrap().as_bytes(), b"\r\n");
        assert_eq!(r.read_line().unwrap().as_bytes(), b"\r");
        assert_eq!(r.read_line().unwrap().as_bytes(), b"x\n");
    }

    #[test]
    fn test_empty_input_fails() {
        let mut r = reader(b"");
        let err = r.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_unterminated_line_fails() {
        let mut r = reader(b"1234");
        let err = r.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_cr_at_end_of_stream_fails() {
        // The CRLF lookahead runs out of input.
        let mut r = reader(b"1234\r");
        assert!(r.read_line().is_err());
    }

    #[test]
    fn test_non_utf8_bytes_preserved() {
        let mut r = reader(b"%\xE2\xE3\xCF\xD3\n");
        let line = r.read_line().unwrap();
        assert_eq!(line.as_bytes(), b"%\xE2\xE3\xCF\xD3\n");
        assert_eq!(line.len(), 6);
    }

    #[test]
    fn test_trim_eol_without_terminator() {
        let line = Line {
            bytes: b"42".to_vec(),
        };
        assert_eq!(line.trim_eol(), b"42");
        assert_eq!(line.ending(), None);
    }

    #[test]
    fn test_iterator_stops_on_line_boundary() {
        let r = reader(b"one\rtwo\r\nthree\n");
        let lines: Vec<Line> = r.collect::<io::Result<_>>().unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].ending(), Some(LineEnding::Cr));
        assert_eq!(lines[1].ending(), Some(LineEnding::CrLf));
        assert_eq!(lines[2].to_string_lossy(), "three\n");
    }

    #[test]
    fn test_iterator_reports_truncated_tail() {
        let mut r = reader(b"one\ntwo");
        assert!(r.next().unwrap().is_ok());
        assert!(r.next().unwrap().is_err());
    }

    #[test]
    fn test_line_ending_bytes() {
        assert_eq!(LineEnding::Cr.as_bytes(), b"\r");
        assert_eq!(LineEnding::Lf.as_bytes(), b"\n");
        assert_eq!(LineEnding::CrLf.as_bytes(), b"\r\n");
    }
}

//! Byte source abstractions
//!
//! The bootstrap parser needs three capabilities from whatever holds the
//! document bytes: sequential reads, seeks, and positional reads that leave the
//! sequential cursor alone. [`ByteSource`] bundles them so an in-memory buffer,
//! a file handle, or any other seekable stream can back the parser.

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};

/// A seekable stream that can also be read at an absolute offset.
///
/// `read_at` must not depend on or move the cursor used by [`Read`] and
/// [`Seek`].
pub trait ByteSource: Read + Seek {
    /// Read up to `buf.len()` bytes starting at `offset`.
    ///
    /// Returns the number of bytes read; `0` means `offset` is at or past the
    /// end of the source.
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<usize>;

    /// Fill `buf` completely from `offset`, failing with `UnexpectedEof` when
    /// the source ends first.
    fn read_exact_at(&mut self, mut buf: &mut [u8], mut offset: u64) -> io::Result<()> {
        while !buf.is_empty() {
            match self.read_at(buf, offset) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        format!("source ended before offset {}", offset + buf.len() as u64),
                    ))
                }
                Ok(n) => {
                    buf = &mut buf[n..];
                    offset += n as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

impl<T: AsRef<[u8]>> ByteSource for Cursor<T> {
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        let data = self.get_ref().as_ref();
        let start = match usize::try_from(offset) {
            Ok(start) if start < data.len() => start,
            _ => return Ok(0),
        };
        let n = buf.len().min(data.len() - start);
        buf[..n].copy_from_slice(&data[start..start + n]);
        Ok(n)
    }
}

#[cfg(unix)]
impl ByteSource for File {
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        <File as std::os::unix::fs::FileExt>::read_at(self, buf, offset)
    }
}

#[cfg(not(unix))]
impl ByteSource for File {
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        read_at_restoring_cursor(self, buf, offset)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        (**self).read_at(buf, offset)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        (**self).read_at(buf, offset)
    }
}

/// Adapts any `Read + Seek` stream into a [`ByteSource`].
///
/// Positional reads seek to the requested offset and then put the cursor back
/// where it was, so sequential reads resume unaffected.
#[derive(Debug)]
pub struct SeekingSource<R> {
    inner: R,
}

impl<R: Read + Seek> SeekingSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for SeekingSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Seek> Seek for SeekingSource<R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

impl<R: Read + Seek> ByteSource for SeekingSource<R> {
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        read_at_restoring_cursor(&mut self.inner, buf, offset)
    }
}

fn read_at_restoring_cursor<R: Read + Seek + ?Sized>(
    reader: &mut R,
    buf: &mut [u8],
    offset: u64,
) -> io::Result<usize> {
    let saved = reader.stream_position()?;
    reader.seek(SeekFrom::Start(offset))?;
    let result = read_full(reader, buf);
    // Restore even when the read failed; the read error wins if both fail.
    let restored = reader.seek(SeekFrom::Start(saved));
    let n = result?;
    restored?;
    Ok(n)
}

/// Read until `buf` is full or the reader reports end of stream
fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

//! Test PDF Builder
//!
//! A builder for creating test PDFs whose header and trailer can be shaped
//! independently: line endings, padding between the body and the trailer,
//! incremental updates, and deliberately broken markers.

use pdf_bootstrap::parser::LineEnding;
use pdf_bootstrap::PdfVersion;

/// Bytes produced by [`TestPdfBuilder::build`]
#[derive(Debug, Clone)]
pub struct BuiltPdf {
    pub bytes: Vec<u8>,
    /// Offset of every `xref` keyword written, oldest first
    pub xref_offsets: Vec<i64>,
}

impl BuiltPdf {
    /// The offset the final `startxref` points to
    pub fn last_xref_offset(&self) -> i64 {
        self.xref_offsets.last().copied().unwrap_or_default()
    }
}

/// Builder for creating test PDFs
#[derive(Debug, Clone)]
pub struct TestPdfBuilder {
    version: PdfVersion,
    header_line: Option<String>,
    line_ending: LineEnding,
    include_binary_marker: bool,
    objects: Vec<String>,
    filler: usize,
    updates: usize,
    trailing_padding: usize,
    startxref_text: Option<String>,
    write_startxref: bool,
    write_eof: bool,
}

impl TestPdfBuilder {
    /// Create a new PDF builder with default settings
    pub fn new() -> Self {
        Self {
            version: PdfVersion::new(1, 4),
            header_line: None,
            line_ending: LineEnding::Lf,
            include_binary_marker: true,
            objects: Vec::new(),
            filler: 0,
            updates: 0,
            trailing_padding: 0,
            startxref_text: None,
            write_startxref: true,
            write_eof: true,
        }
    }

    /// Create a minimal valid PDF with a catalog and an empty page tree
    pub fn minimal() -> Self {
        Self::new()
            .with_object("<< /Type /Catalog /Pages 2 0 R >>")
            .with_object("<< /Type /Pages /Kids [] /Count 0 >>")
    }

    /// Set PDF version
    pub fn with_version(mut self, version: PdfVersion) -> Self {
        self.version = version;
        self
    }

    /// Replace the whole first line (without its terminator)
    pub fn with_header_line(mut self, line: &str) -> Self {
        self.header_line = Some(line.to_string());
        self
    }

    /// Terminator used for every line the builder writes
    pub fn with_line_ending(mut self, ending: LineEnding) -> Self {
        self.line_ending = ending;
        self
    }

    pub fn with_binary_marker(mut self, include: bool) -> Self {
        self.include_binary_marker = include;
        self
    }

    /// Append an indirect object; objects are numbered from 1
    pub fn with_object(mut self, body: &str) -> Self {
        self.objects.push(body.to_string());
        self
    }

    /// Insert `len` bytes of comment filler after the objects
    pub fn with_filler(mut self, len: usize) -> Self {
        self.filler = len;
        self
    }

    /// Append `count` incremental updates, each with its own xref and trailer
    pub fn with_incremental_updates(mut self, count: usize) -> Self {
        self.updates = count;
        self
    }

    /// Append `len` line-ending bytes after the final `%%EOF`
    pub fn with_trailing_padding(mut self, len: usize) -> Self {
        self.trailing_padding = len;
        self
    }

    /// Write `text` after the last `startxref` instead of the real offset
    pub fn with_startxref_text(mut self, text: &str) -> Self {
        self.startxref_text = Some(text.to_string());
        self
    }

    pub fn without_startxref(mut self) -> Self {
        self.write_startxref = false;
        self
    }

    pub fn without_eof_marker(mut self) -> Self {
        self.write_eof = false;
        self
    }

    /// Build the PDF
    pub fn build(&self) -> BuiltPdf {
        let eol = self.line_ending.as_bytes();
        let mut pdf = Vec::new();
        let mut xref_offsets = Vec::new();

        // Header
        let header = self
            .header_line
            .clone()
            .unwrap_or_else(|| format!("%PDF-{}", self.version));
        push_line(&mut pdf, header.as_bytes(), eol);

        // Binary marker
        if self.include_binary_marker {
            push_line(&mut pdf, b"%\xE2\xE3\xCF\xD3", eol);
        }

        let mut positions = Vec::with_capacity(self.objects.len());
        for (i, body) in self.objects.iter().enumerate() {
            positions.push(pdf.len());
            push_line(&mut pdf, format!("{} 0 obj", i + 1).as_bytes(), eol);
            push_line(&mut pdf, body.as_bytes(), eol);
            push_line(&mut pdf, b"endobj", eol);
        }

        if self.filler > 0 {
            let mut comment = vec![b'%'];
            comment.resize(self.filler, b'-');
            push_line(&mut pdf, &comment, eol);
        }

        let sections = self.updates + 1;
        for section in 0..sections {
            let is_last = section + 1 == sections;

            if section > 0 {
                // An update rewrites object 1
                positions = vec![pdf.len()];
                push_line(&mut pdf, b"1 0 obj", eol);
                push_line(&mut pdf, format!("(revision {section})").as_bytes(), eol);
                push_line(&mut pdf, b"endobj", eol);
            }

            let xref_offset = pdf.len() as i64;
            xref_offsets.push(xref_offset);
            self.write_xref(&mut pdf, &positions, section > 0, eol);

            let mut trailer = format!("<< /Size {} /Root 1 0 R", self.objects.len() + 1);
            if section > 0 {
                trailer.push_str(&format!(" /Prev {}", xref_offsets[section - 1]));
            }
            trailer.push_str(" >>");
            push_line(&mut pdf, b"trailer", eol);
            push_line(&mut pdf, trailer.as_bytes(), eol);

            if self.write_startxref || !is_last {
                push_line(&mut pdf, b"startxref", eol);
                let offset = match (&self.startxref_text, is_last) {
                    (Some(text), true) => text.clone(),
                    _ => xref_offset.to_string(),
                };
                push_line(&mut pdf, offset.as_bytes(), eol);
            }

            if self.write_eof || !is_last {
                push_line(&mut pdf, b"%%EOF", eol);
            }
        }

        for _ in 0..self.trailing_padding {
            pdf.push(b'\n');
        }

        BuiltPdf {
            bytes: pdf,
            xref_offsets,
        }
    }

    /// Write a classic cross-reference table
    fn write_xref(&self, pdf: &mut Vec<u8>, positions: &[usize], is_update: bool, eol: &[u8]) {
        push_line(pdf, b"xref", eol);
        if is_update {
            push_line(pdf, format!("1 {}", positions.len()).as_bytes(), eol);
        } else {
            push_line(pdf, format!("0 {}", positions.len() + 1).as_bytes(), eol);
            push_line(pdf, b"0000000000 65535 f ", eol);
        }
        for &pos in positions {
            push_line(pdf, format!("{pos:010} 00000 n ").as_bytes(), eol);
        }
    }
}

fn push_line(pdf: &mut Vec<u8>, line: &[u8], eol: &[u8]) {
    pdf.extend_from_slice(line);
    pdf.extend_from_slice(eol);
}

impl Default for TestPdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use crate::parser::PdfVersion;

/// What the bootstrap parser learned about a PDF file.
///
/// Both fields start out unset. Each is filled in once, after the
/// corresponding part of the file has been fully read and validated, so a
/// failed parse can leave the version set while the offset stays empty.
///
/// # Example
///
/// ```rust
/// use pdf_bootstrap::parser::Parser;
/// use std::io::Cursor;
///
/// let bytes = b"%PDF-1.4\n1 0 obj\n<< >>\nendobj\nstartxref\n9\n%%EOF".to_vec();
/// let mut parser = Parser::new(Cursor::new(bytes)).unwrap();
/// parser.parse().unwrap();
///
/// let document = parser.document();
/// assert_eq!(document.version(), Some(1.4));
/// assert_eq!(document.start_xref_offset(), Some(9));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Document {
    version: Option<PdfVersion>,
    start_xref_offset: Option<i64>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Header version as the decimal number written in the file
    pub fn version(&self) -> Option<f32> {
        self.version.map(|v| v.as_f32())
    }

    /// Header version as `major.minor`
    pub fn pdf_version(&self) -> Option<PdfVersion> {
        self.version
    }

    /// Byte offset of the last cross-reference section, as recorded after
    /// `startxref`
    pub fn start_xref_offset(&self) -> Option<i64> {
        self.start_xref_offset
    }

    /// Whether both header and trailer have been located
    pub fn is_complete(&self) -> bool {
        self.version.is_some() && self.start_xref_offset.is_some()
    }

    pub(crate) fn set_version(&mut self, version: PdfVersion) {
        debug_assert!(self.version.is_none(), "document version written twice");
        self.version = Some(version);
    }

    pub(crate) fn set_start_xref_offset(&mut self, offset: i64) {
        debug_assert!(
            self.start_xref_offset.is_none(),
            "startxref offset written twice"
        );
        self.start_xref_offset = Some(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_empty() {
        let doc = Document::new();
        assert_eq!(doc.version(), None);
        assert_eq!(doc.pdf_version(), None);
        assert_eq!(doc.start_xref_offset(), None);
        assert!(!doc.is_complete());
    }

    #[test]
    fn test_setters() {
        let mut doc = Document::new();
        doc.set_version(PdfVersion::new(1, 4));
        assert_eq!(doc.version(), Some(1.4));
        assert!(!doc.is_complete());

        doc.set_start_xref_offset(42);
        assert_eq!(doc.start_xref_offset(), Some(42));
        assert!(doc.is_complete());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_document() {
        let mut doc = Document::new();
        doc.set_version(PdfVersion::new(1, 7));

        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(
            json,
            r#"{"version":{"major":1,"minor":7},"start_xref_offset":null}"#
        );
    }
}

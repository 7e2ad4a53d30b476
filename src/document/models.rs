// src/document/models.rs
use std::path::{Path, PathBuf};

/// Where the bytes of a resume come from.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// A file discovered in a folder or named on the command line
    Path(PathBuf),
    /// An upload already held in memory
    Bytes(Vec<u8>),
}

/// One resume waiting to be processed.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub source: DocumentSource,
}

impl Document {
    /// Builds a document backed by a file. The name is the file name component.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            source: DocumentSource::Path(path.to_path_buf()),
        }
    }

    /// Builds a document from an upload already held in memory.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            source: DocumentSource::Bytes(bytes),
        }
    }
}

/// Plain text derived from a document. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl AsRef<str> for ExtractedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_name_from_path() {
        let doc = Document::from_path("/tmp/resumes/jane_doe.pdf");
        assert_eq!(doc.name, "jane_doe.pdf");
        assert!(matches!(doc.source, DocumentSource::Path(_)));
    }

    #[test]
    fn test_blank_text() {
        assert!(ExtractedText::new(" \n\t".to_string()).is_blank());
        assert!(!ExtractedText::new("Python".to_string()).is_blank());
    }
}

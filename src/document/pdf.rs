// src/document/pdf.rs
use std::panic::{self, AssertUnwindSafe};

use crate::document::models::{Document, DocumentSource, ExtractedText};
use crate::utils::error::ExtractError;

/// Turns a document into plain text. The batch runner only sees this trait.
pub trait TextExtractor {
    fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractError>;
}

/// Text extractor backed by `pdf-extract`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractError> {
        let bytes = match &document.source {
            DocumentSource::Path(path) => {
                tracing::debug!("Reading {} from {}", document.name, path.display());
                std::fs::read(path).map_err(|source| ExtractError::Io {
                    name: document.name.clone(),
                    source,
                })?
            }
            DocumentSource::Bytes(bytes) => bytes.clone(),
        };

        let pages = extract_pages(&document.name, &bytes)?;
        tracing::debug!("Extracted {} page(s) from {}", pages.len(), document.name);

        let text = ExtractedText::new(join_pages(pages));
        if text.is_blank() {
            tracing::warn!("No extractable text in {}", document.name);
        }
        Ok(text)
    }
}

/// Runs the PDF backend, converting both its errors and its panics into `ExtractError`.
fn extract_pages(name: &str, bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));

    match outcome {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(ExtractError::Pdf {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!("PDF backend panicked on {}: {}", name, reason);
            Err(ExtractError::Backend {
                name: name.to_string(),
                reason,
            })
        }
    }
}

/// Each page with text is followed by a newline; blank pages contribute nothing.
pub fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut text = String::new();
    for page in pages {
        if page.trim().is_empty() {
            continue;
        }
        text.push_str(&page);
        text.push('\n');
    }
    text
}

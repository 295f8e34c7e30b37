//! Upstream text source: turns an uploaded document into plain text.
//!
//! `AppState` carries an `Arc<dyn TextExtractor>`; the default is
//! [`PdfTextExtractor`]. Layout fidelity is not guaranteed: the engine is
//! written to cope with whatever noise the extractor leaves behind.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Uploaded file is not a PDF document")]
    NotPdf,

    #[error("PDF text extraction failed: {0}")]
    Parse(String),

    #[error("PDF extraction task aborted: {0}")]
    Aborted(String),
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, document: Bytes) -> Result<String, ExtractionError>;
}

/// `pdf-extract` backed extractor. Parsing runs on the blocking pool.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, document: Bytes) -> Result<String, ExtractionError> {
        if !looks_like_pdf(&document) {
            return Err(ExtractionError::NotPdf);
        }

        let size = document.len();
        let text = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&document)
                .map_err(|e| ExtractionError::Parse(e.to_string()))
        })
        .await
        .map_err(|e| ExtractionError::Aborted(e.to_string()))??;

        debug!(bytes = size, chars = text.len(), "Extracted text from PDF");
        Ok(text)
    }
}

pub fn looks_like_pdf(document: &[u8]) -> bool {
    document.starts_with(PDF_MAGIC)
}

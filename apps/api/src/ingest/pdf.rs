//! Resume text extraction from uploaded PDF bytes.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("PDF extraction aborted: {0}")]
    Aborted(String),

    #[error("PDF contains no extractable text")]
    NoText,
}

/// Turns an uploaded resume into plain text.
#[async_trait]
pub trait ResumeReader: Send + Sync {
    async fn read_text(&self, bytes: Bytes) -> Result<String, PdfError>;
}

/// Reads resumes with `pdf-extract`.
pub struct PdfResumeReader;

#[async_trait]
impl ResumeReader for PdfResumeReader {
    async fn read_text(&self, bytes: Bytes) -> Result<String, PdfError> {
        extract_text(bytes).await
    }
}

/// Extracts the text of every page, in order.
///
/// Runs on the blocking pool; a panic inside the extractor surfaces as
/// `PdfError::Aborted` rather than taking the worker down.
pub async fn extract_text(bytes: Bytes) -> Result<String, PdfError> {
    let text = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| PdfError::Aborted(e.to_string()))?
    .map_err(PdfError::Extraction)?;

    if text.trim().is_empty() {
        return Err(PdfError::NoText);
    }

    debug!("Extracted {} chars of resume text", text.len());
    Ok(text)
}

/// True when `file_name` names a PDF (case-insensitive extension check).
pub fn is_pdf_file_name(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(".pdf")
}

//! Text extraction for uploaded documents.
//!
//! PDFs (by filename extension, case-insensitive) are parsed with `lopdf` and
//! their pages concatenated in document order. Everything else must be UTF-8.

use lopdf::Document;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::AppError;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("file is not valid UTF-8 text: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("failed to parse PDF: {0}")]
    PdfParse(String),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Decode(e) => AppError::Decode(e.to_string()),
            ExtractError::PdfParse(msg) => AppError::PdfParse(msg),
        }
    }
}

pub fn is_pdf(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".pdf")
}

/// Extract plain text from an upload, using the filename as the type hint.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
    if is_pdf(filename) {
        extract_pdf(bytes)
    } else {
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

/// Concatenate the text of every page and trim the result.
///
/// A page whose text can't be extracted contributes nothing; only a document
/// that fails to load at all is an error.
pub fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractError::PdfParse(e.to_string()))?;

    let mut text = String::new();
    for (page_num, _page_id) in doc.get_pages() {
        match doc.extract_text(&[page_num]) {
            Ok(content) => text.push_str(&content),
            Err(e) => warn!(page = page_num, "No text extracted from PDF page: {}", e),
        }
    }

    debug!(pages = doc.get_pages().len(), chars = text.len(), "PDF text extracted");
    Ok(text.trim().to_string())
}

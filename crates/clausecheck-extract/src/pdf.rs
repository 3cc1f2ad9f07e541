//! PDF text layer extraction via `lopdf`.
//!
//! Pages are read in page-number order and their text is concatenated as-is.
//! No OCR and no layout reconstruction. Encrypted documents are opened with the
//! empty user password or not at all.

use clausecheck_core::DocumentText;
use lopdf::Document;
use tracing::{debug, info};

use crate::ExtractError;

/// Extract the whole document as one string, pages in order.
pub fn extract_text(bytes: &[u8]) -> Result<DocumentText, ExtractError> {
    let pages = extract_pages(bytes)?;
    let text = DocumentText::from(pages.concat());
    info!(
        bytes = bytes.len(),
        pages = pages.len(),
        chars = text.char_count(),
        "extracted document text"
    );
    Ok(text)
}

/// Extract each page's text separately, in page order.
///
/// Fails as a whole if the payload or any page cannot be decoded.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    if bytes.is_empty() {
        return Err(ExtractError::parse("empty payload"));
    }

    // The document is owned by this frame and dropped on every return path.
    let mut doc = Document::load_mem(bytes).map_err(ExtractError::parse)?;
    if doc.trailer.get(b"Encrypt").is_ok() {
        // Same as opening without a password prompt: only the empty user password.
        doc.decrypt("")
            .map_err(|e| ExtractError::parse(format!("encrypted document: {e}")))?;
        debug!("decrypted with empty user password");
    }

    let page_numbers: Vec<u32> = doc.get_pages().into_keys().collect();
    let mut pages = Vec::with_capacity(page_numbers.len());
    for page_number in page_numbers {
        let text = doc
            .extract_text(&[page_number])
            .map_err(|e| ExtractError::parse(format!("page {page_number}: {e}")))?;
        debug!(page = page_number, chars = text.chars().count(), "page text");
        pages.push(text);
    }

    Ok(pages)
}

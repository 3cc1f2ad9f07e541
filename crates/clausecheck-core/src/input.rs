//! Boundary-level input selection: uploaded document, pasted text, or nothing.

use thiserror::Error;

use crate::DocumentText;

/// Raised when neither a document nor text was supplied.
///
/// Handled by the presentation layer; the core is never invoked in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please upload or paste contract text.")]
pub struct NoInputProvided;

/// What the user submitted for one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Raw bytes of an uploaded document, still to be extracted.
    Document(Vec<u8>),
    /// Pasted text, classified directly.
    Text(DocumentText),
}

impl Input {
    /// Pick the input for an analysis. A non-empty document wins over text;
    /// empty payloads count as absent.
    pub fn select(
        document: Option<Vec<u8>>,
        text: Option<String>,
    ) -> Result<Self, NoInputProvided> {
        if let Some(bytes) = document.filter(|b| !b.is_empty()) {
            return Ok(Self::Document(bytes));
        }
        match text.filter(|t| !t.is_empty()) {
            Some(text) => Ok(Self::Text(DocumentText::from(text))),
            None => Err(NoInputProvided),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Document(_) => "document",
            Self::Text(_) => "text",
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The payload is not a readable paged document. No partial text is kept.
    #[error("document could not be parsed: {0}")]
    DocumentParse(String),
}

impl ExtractError {
    pub(crate) fn parse(reason: impl std::fmt::Display) -> Self {
        Self::DocumentParse(reason.to_string())
    }
}

use clausecheck_classify::Classifier;
use clausecheck_core::{AnalysisResult, Input};
use clausecheck_extract::ExtractError;
use tracing::info;

/// Run one analysis: extract if a document was supplied, then classify.
///
/// A document that fails to parse produces no result at all.
pub fn analyze_input(input: Input) -> Result<AnalysisResult, ExtractError> {
    info!(input = input.kind(), "analyzing contract");
    let text = match input {
        Input::Document(bytes) => clausecheck_extract::extract_text(&bytes)?,
        Input::Text(text) => text,
    };
    Ok(Classifier.classify(&text))
}

pub mod analysis;
pub mod document;
pub mod input;

pub use analysis::{
    AnalysisResult, NOT_FOUND, PARTIES_UNCLEAR, PLAIN_ENGLISH_SUMMARY, RiskFlags, RiskKind,
    Severity,
};
pub use document::DocumentText;
pub use input::{Input, NoInputProvided};

//! Clause and risk classification by fixed keyword tests.
//!
//! No model and no configuration: every field of the
//! [`AnalysisResult`](clausecheck_core::AnalysisResult) is decided by literal
//! substring checks against a lower-cased copy of the input.

mod classifier;
pub mod rules;

pub use classifier::{Classifier, classify, extract_parties};

//! Keyword classification of contract text into an [`AnalysisResult`].

use clausecheck_core::{
    AnalysisResult, DocumentText, NOT_FOUND, PARTIES_UNCLEAR, PLAIN_ENGLISH_SUMMARY, RiskFlags,
    RiskKind,
};
use tracing::debug;

use crate::rules::{PARTIES_KEYWORD, PARTIES_TERMINATOR, RULES, Target};

/// Stateless clause/risk classifier.
///
/// Holds nothing; exists so presentation layers can carry the classifier as a
/// value next to their other collaborators.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier;

impl Classifier {
    pub fn classify(&self, text: &DocumentText) -> AnalysisResult {
        classify(text.as_str())
    }
}

/// Classify contract text. Total over all strings, including `""`.
///
/// Same input, same output: no state is read or written.
pub fn classify(text: &str) -> AnalysisResult {
    let lowered = text.to_lowercase();

    let mut result = AnalysisResult {
        parties: extract_parties(text, &lowered),
        duration: NOT_FOUND.to_string(),
        payment_terms: NOT_FOUND.to_string(),
        termination_clause: NOT_FOUND.to_string(),
        renewal_terms: NOT_FOUND.to_string(),
        risk_flags: RiskFlags {
            auto_renewal_trap: NOT_FOUND.to_string(),
            liability_risk: NOT_FOUND.to_string(),
            missing_exit_clause: NOT_FOUND.to_string(),
        },
        plain_english_summary: PLAIN_ENGLISH_SUMMARY.to_string(),
    };

    for rule in RULES {
        if rule.trigger.matches(&lowered) {
            *slot(&mut result, rule.target) = rule.hit.to_string();
        }
    }

    debug!(
        chars = text.chars().count(),
        risks = result.risk_flags.raised().count(),
        "classified contract text"
    );
    result
}

/// Parties named after the first "between", up to the next "." or the next
/// "between", whichever comes first.
///
/// The trigger is case-insensitive but the slice is cut from the original
/// text on the literal lowercase keyword, so a match that only exists in the
/// lowered copy ("BETWEEN", "Between") yields [`PARTIES_UNCLEAR`]. Without a
/// following "." the slice runs to the end of the text.
pub fn extract_parties(text: &str, lowered: &str) -> String {
    if !lowered.contains(PARTIES_KEYWORD) {
        return NOT_FOUND.to_string();
    }

    match text.split_once(PARTIES_KEYWORD) {
        Some((_, rest)) => {
            let segment = rest
                .split_once(PARTIES_KEYWORD)
                .map_or(rest, |(segment, _)| segment);
            let end = segment.find(PARTIES_TERMINATOR).unwrap_or(segment.len());
            segment[..end].trim().to_string()
        }
        None => PARTIES_UNCLEAR.to_string(),
    }
}

fn slot(result: &mut AnalysisResult, target: Target) -> &mut String {
    match target {
        Target::Duration => &mut result.duration,
        Target::PaymentTerms => &mut result.payment_terms,
        Target::TerminationClause => &mut result.termination_clause,
        Target::RenewalTerms => &mut result.renewal_terms,
        Target::Risk(RiskKind::AutoRenewalTrap) => &mut result.risk_flags.auto_renewal_trap,
        Target::Risk(RiskKind::LiabilityRisk) => &mut result.risk_flags.liability_risk,
        Target::Risk(RiskKind::MissingExitClause) => &mut result.risk_flags.missing_exit_clause,
    }
}

//! The analysis result record produced by one classification run.
//!
//! Every field is a plain string: either a human-readable finding or the
//! [`NOT_FOUND`] sentinel. The JSON form uses the same keys as the field names,
//! with the three risks nested under `risk_flags`.

use serde::{Deserialize, Serialize};

/// Placeholder used whenever a keyword trigger is absent.
pub const NOT_FOUND: &str = "Not Found";

/// Value of `parties` when "between" is present but the text after it cannot be sliced.
pub const PARTIES_UNCLEAR: &str = "Parties mentioned but unclear";

/// Summary returned for every input.
pub const PLAIN_ENGLISH_SUMMARY: &str = "This contract outlines commercial terms including \
duration, payment, renewal, and termination. Review highlighted risks before signing.";

/// Structured output of one classification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub parties: String,
    pub duration: String,
    pub payment_terms: String,
    pub termination_clause: String,
    pub renewal_terms: String,
    pub risk_flags: RiskFlags,
    pub plain_english_summary: String,
}

/// Named risks, each a description or [`NOT_FOUND`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlags {
    pub auto_renewal_trap: String,
    pub liability_risk: String,
    pub missing_exit_clause: String,
}

/// Identifies one entry of [`RiskFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskKind {
    AutoRenewalTrap,
    LiabilityRisk,
    MissingExitClause,
}

/// Badge weight for a raised risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

impl RiskKind {
    /// Display order used by every presentation layer.
    pub const ALL: [RiskKind; 3] = [
        Self::AutoRenewalTrap,
        Self::LiabilityRisk,
        Self::MissingExitClause,
    ];

    /// JSON key under `risk_flags`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AutoRenewalTrap => "auto_renewal_trap",
            Self::LiabilityRisk => "liability_risk",
            Self::MissingExitClause => "missing_exit_clause",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AutoRenewalTrap => "Auto Renewal Risk",
            Self::LiabilityRisk => "Liability Risk",
            Self::MissingExitClause => "Missing Exit Clause",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::AutoRenewalTrap => Severity::High,
            Self::LiabilityRisk | Self::MissingExitClause => Severity::Medium,
        }
    }
}

impl RiskFlags {
    pub fn get(&self, kind: RiskKind) -> &str {
        match kind {
            RiskKind::AutoRenewalTrap => &self.auto_renewal_trap,
            RiskKind::LiabilityRisk => &self.liability_risk,
            RiskKind::MissingExitClause => &self.missing_exit_clause,
        }
    }

    /// Risks whose value is not the sentinel, in [`RiskKind::ALL`] order.
    pub fn raised(&self) -> impl Iterator<Item = (RiskKind, &str)> {
        RiskKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, value)| *value != NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(auto: &str, liability: &str, exit: &str) -> RiskFlags {
        RiskFlags {
            auto_renewal_trap: auto.into(),
            liability_risk: liability.into(),
            missing_exit_clause: exit.into(),
        }
    }

    #[test]
    fn raised_skips_sentinels_and_keeps_order() {
        let f = flags("renews", NOT_FOUND, "no exit");
        let raised: Vec<_> = f.raised().collect();
        assert_eq!(
            raised,
            vec![
                (RiskKind::AutoRenewalTrap, "renews"),
                (RiskKind::MissingExitClause, "no exit"),
            ]
        );
    }

    #[test]
    fn raised_empty_when_all_sentinel() {
        let f = flags(NOT_FOUND, NOT_FOUND, NOT_FOUND);
        assert_eq!(f.raised().count(), 0);
    }

    #[test]
    fn severity_mapping() {
        assert_eq!(RiskKind::AutoRenewalTrap.severity(), Severity::High);
        assert_eq!(RiskKind::LiabilityRisk.severity(), Severity::Medium);
        assert_eq!(RiskKind::MissingExitClause.severity(), Severity::Medium);
    }

    #[test]
    fn json_uses_record_keys() {
        let result = AnalysisResult {
            parties: "Acme and Beta".into(),
            duration: NOT_FOUND.into(),
            payment_terms: NOT_FOUND.into(),
            termination_clause: NOT_FOUND.into(),
            renewal_terms: NOT_FOUND.into(),
            risk_flags: flags(NOT_FOUND, NOT_FOUND, "No clear exit clause found."),
            plain_english_summary: PLAIN_ENGLISH_SUMMARY.into(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["parties"], "Acme and Beta");
        for kind in RiskKind::ALL {
            assert!(value["risk_flags"].get(kind.as_str()).is_some());
        }
        assert_eq!(
            value["risk_flags"]["missing_exit_clause"],
            "No clear exit clause found."
        );
    }

    #[test]
    fn summary_text_is_one_line() {
        assert!(!PLAIN_ENGLISH_SUMMARY.contains('\n'));
        assert!(PLAIN_ENGLISH_SUMMARY.starts_with("This contract outlines commercial terms"));
        assert!(PLAIN_ENGLISH_SUMMARY.ends_with("before signing."));
    }
}

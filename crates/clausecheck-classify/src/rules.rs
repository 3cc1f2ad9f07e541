//! The fixed keyword rule table.
//!
//! Each rule is evaluated independently against the lower-cased text; a rule
//! that fires writes its `hit` value into its target field, otherwise the
//! field keeps the `Not Found` sentinel. Parties are handled separately since
//! they echo part of the input back.
//!
//! `termination_clause` fires on "terminate" while `missing_exit_clause` fires
//! on the absence of "termination". The two keywords differ and are kept that
//! way.

use clausecheck_core::RiskKind;

/// Record field a rule writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Duration,
    PaymentTerms,
    TerminationClause,
    RenewalTerms,
    Risk(RiskKind),
}

/// When a rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// At least one keyword occurs.
    AnyPresent(&'static [&'static str]),
    /// The keyword does not occur.
    Absent(&'static str),
}

impl Trigger {
    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Self::AnyPresent(keywords) => keywords.iter().any(|k| lowered.contains(k)),
            Self::Absent(keyword) => !lowered.contains(keyword),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub target: Target,
    pub trigger: Trigger,
    pub hit: &'static str,
}

/// Literal that triggers the parties rule and starts the echoed slice.
pub const PARTIES_KEYWORD: &str = "between";

/// Ends the echoed parties slice.
pub const PARTIES_TERMINATOR: char = '.';

pub const RULES: &[KeywordRule] = &[
    KeywordRule {
        target: Target::Duration,
        trigger: Trigger::AnyPresent(&["month", "year"]),
        hit: "Duration detected",
    },
    KeywordRule {
        target: Target::PaymentTerms,
        trigger: Trigger::AnyPresent(&["₹", "payment"]),
        hit: "Payment clause detected",
    },
    KeywordRule {
        target: Target::TerminationClause,
        trigger: Trigger::AnyPresent(&["terminate"]),
        hit: "Termination clause detected",
    },
    KeywordRule {
        target: Target::RenewalTerms,
        trigger: Trigger::AnyPresent(&["auto-renew"]),
        hit: "Auto-renewal clause detected",
    },
    KeywordRule {
        target: Target::Risk(RiskKind::AutoRenewalTrap),
        trigger: Trigger::AnyPresent(&["auto-renew"]),
        hit: "Contract auto-renews. Review carefully.",
    },
    KeywordRule {
        target: Target::Risk(RiskKind::LiabilityRisk),
        trigger: Trigger::AnyPresent(&["liability", "indemnify"]),
        hit: "Liability clause detected. Check exposure.",
    },
    KeywordRule {
        target: Target::Risk(RiskKind::MissingExitClause),
        trigger: Trigger::Absent("termination"),
        hit: "No clear exit clause found.",
    },
];

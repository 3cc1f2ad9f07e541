//! Vertical card display for an analysis result.

use std::io::{self, Write};

use clausecheck_core::AnalysisResult;

/// Write the result as a card grouped into clause, risk and summary sections.
pub fn write_card(out: &mut impl Write, result: &AnalysisResult) -> io::Result<()> {
    writeln!(out, "=== Contract Analysis ===")?;
    writeln!(out)?;

    writeln!(out, "Key Clauses")?;
    for (label, value) in [
        ("Parties", &result.parties),
        ("Duration", &result.duration),
        ("Payment Terms", &result.payment_terms),
        ("Termination", &result.termination_clause),
        ("Renewal", &result.renewal_terms),
    ] {
        writeln!(out, "  {:<26} {}", label, value)?;
    }
    writeln!(out)?;

    writeln!(out, "Risk Flags")?;
    let mut any = false;
    for (kind, value) in result.risk_flags.raised() {
        any = true;
        let badge = format!("[{}] {}", kind.severity().as_str(), kind.label());
        writeln!(out, "  {:<26} {}", badge, value)?;
    }
    if !any {
        writeln!(out, "  (none)")?;
    }
    writeln!(out)?;

    writeln!(out, "Plain English Summary")?;
    writeln!(out, "  {}", result.plain_english_summary)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausecheck_core::{NOT_FOUND, PLAIN_ENGLISH_SUMMARY, RiskFlags};

    fn render(result: &AnalysisResult) -> String {
        let mut out = Vec::new();
        write_card(&mut out, result).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn quiet() -> AnalysisResult {
        AnalysisResult {
            parties: "Acme and Beta".into(),
            duration: NOT_FOUND.into(),
            payment_terms: "Payment clause detected".into(),
            termination_clause: "Termination clause detected".into(),
            renewal_terms: NOT_FOUND.into(),
            risk_flags: RiskFlags {
                auto_renewal_trap: NOT_FOUND.into(),
                liability_risk: NOT_FOUND.into(),
                missing_exit_clause: NOT_FOUND.into(),
            },
            plain_english_summary: PLAIN_ENGLISH_SUMMARY.into(),
        }
    }

    #[test]
    fn clause_rows_are_aligned() {
        let card = render(&quiet());
        assert!(card.starts_with("=== Contract Analysis ===\n"));
        assert!(card.contains(&format!("  {:<26} Acme and Beta\n", "Parties")));
        assert!(card.contains(&format!("  {:<26} {}\n", "Duration", NOT_FOUND)));
        assert!(card.contains(&format!("  {:<26} Payment clause detected\n", "Payment Terms")));
    }

    #[test]
    fn no_raised_flags() {
        let card = render(&quiet());
        assert!(card.contains("Risk Flags\n  (none)\n"));
        assert!(card.ends_with(&format!("Plain English Summary\n  {PLAIN_ENGLISH_SUMMARY}\n")));
    }

    #[test]
    fn raised_flags_in_display_order() {
        let mut result = quiet();
        result.risk_flags.missing_exit_clause = "No clear exit clause found.".into();
        result.risk_flags.auto_renewal_trap = "Contract auto-renews. Review carefully.".into();

        let card = render(&result);
        assert!(!card.contains("(none)"));
        assert!(!card.contains("Liability Risk"));
        let renewal = card.find("[high] Auto Renewal Risk").unwrap();
        let exit = card.find("[medium] Missing Exit Clause").unwrap();
        assert!(renewal < exit);
    }
}

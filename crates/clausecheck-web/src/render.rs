//! HTML pages for the browser form.
//!
//! Everything derived from user input goes through [`escape`] before it is
//! placed into markup.

use clausecheck_core::{AnalysisResult, Severity};

const TITLE: &str = "AI Contract &amp; Document Review Bot";

const STYLE: &str = r#"
body { background-color: #0f172a; color: #e2e8f0; font-family: sans-serif; margin: 0; }
h1, h2, h3 { color: #ffffff; }
.layout { display: flex; }
.sidebar { width: 260px; padding: 2rem 1.5rem; background-color: #111827; min-height: 100vh; }
.main { flex: 1; padding: 2rem; }
textarea { width: 100%; min-height: 12rem; background-color: #1e293b; color: white; }
.columns { display: flex; gap: 1rem; }
.columns > div { flex: 1; }
.card { background-color: #1e293b; padding: 20px; border-radius: 12px; margin-bottom: 15px; }
.success { color: #16a34a; }
.warning { background-color: #78350f; padding: 12px; border-radius: 8px; }
.error { background-color: #7f1d1d; padding: 12px; border-radius: 8px; }
.risk { margin-bottom: 8px; }
.risk-high { color: white; background-color: #dc2626; padding: 6px 10px; border-radius: 8px; }
.risk-medium { color: white; background-color: #f59e0b; padding: 6px 10px; border-radius: 8px; }
.risk-safe { color: white; background-color: #16a34a; padding: 6px 10px; border-radius: 8px; }
button { width: 100%; padding: 10px; margin-top: 1rem; }
"#;

const SIDEBAR: &str = r#"<aside class="sidebar">
<h2>About</h2>
<p><strong>AI Contract Review Bot</strong></p>
<p>Extract key clauses<br>Detect risk flags<br>Generate plain summary</p>
<p>Designed for business automation.</p>
</aside>"#;

const FORM: &str = r#"<form method="post" action="/analyze" enctype="multipart/form-data">
<p><label>Upload Contract PDF <input type="file" name="file" accept=".pdf,application/pdf"></label></p>
<p><label>OR Paste Contract Text Here<br><textarea name="text"></textarea></label></p>
<button type="submit">Analyze Contract</button>
</form>"#;

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The empty form.
pub fn form_page() -> String {
    layout("")
}

/// Form followed by the analysis cards.
pub fn result_page(result: &AnalysisResult) -> String {
    let mut body = String::from("<p class=\"success\">Analysis Complete</p>\n");

    body.push_str("<div class=\"columns\">\n<div>\n");
    body.push_str(&card("Parties", &result.parties));
    body.push_str(&card("Duration", &result.duration));
    body.push_str(&card("Payment Terms", &result.payment_terms));
    body.push_str("</div>\n<div>\n");
    body.push_str(&card("Termination", &result.termination_clause));
    body.push_str(&card("Renewal", &result.renewal_terms));
    body.push_str("</div>\n</div>\n");

    body.push_str("<h2>Risk Flags</h2>\n");
    for (kind, value) in result.risk_flags.raised() {
        body.push_str(&format!(
            "<p class=\"risk\"><span class=\"{}\">{}</span> {}</p>\n",
            badge_class(kind.severity()),
            kind.label(),
            escape(value)
        ));
    }

    body.push_str("<hr>\n");
    body.push_str(&card("Plain English Summary", &result.plain_english_summary));

    layout(&body)
}

/// Shown when neither a file nor text was submitted.
pub fn warning_page(message: &str) -> String {
    layout(&format!("<p class=\"warning\">{}</p>\n", escape(message)))
}

/// Shown when the submitted document could not be processed.
pub fn error_page(message: &str) -> String {
    layout(&format!("<p class=\"error\">{}</p>\n", escape(message)))
}

fn badge_class(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "risk-high",
        Severity::Medium => "risk-medium",
    }
}

fn card(heading: &str, value: &str) -> String {
    format!(
        "<div class=\"card\"><h3>{}</h3>{}</div>\n",
        heading,
        escape(value)
    )
}

fn layout(content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <div class=\"layout\">\n{SIDEBAR}\n<main class=\"main\">\n\
         <h1>{TITLE}</h1>\n\
         <p>Upload a contract or paste text below to analyze clauses and risks.</p>\n\
         {FORM}\n{content}</main>\n</div>\n</body>\n</html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausecheck_core::{NOT_FOUND, PLAIN_ENGLISH_SUMMARY, RiskFlags};

    fn result(parties: &str, flags: [&str; 3]) -> AnalysisResult {
        AnalysisResult {
            parties: parties.into(),
            duration: "Duration detected".into(),
            payment_terms: NOT_FOUND.into(),
            termination_clause: NOT_FOUND.into(),
            renewal_terms: NOT_FOUND.into(),
            risk_flags: RiskFlags {
                auto_renewal_trap: flags[0].into(),
                liability_risk: flags[1].into(),
                missing_exit_clause: flags[2].into(),
            },
            plain_english_summary: PLAIN_ENGLISH_SUMMARY.into(),
        }
    }

    #[test]
    fn escape_markup() {
        assert_eq!(
            escape(r#"<b>"A" & 'B'</b>"#),
            "&lt;b&gt;&quot;A&quot; &amp; &#39;B&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain ₹"), "plain ₹");
    }

    #[test]
    fn parties_are_escaped() {
        let page = result_page(&result(
            "<script>alert(1)</script>",
            [NOT_FOUND, NOT_FOUND, NOT_FOUND],
        ));
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn only_raised_risks_get_badges() {
        let page = result_page(&result(
            "A and B",
            ["Contract auto-renews. Review carefully.", NOT_FOUND, NOT_FOUND],
        ));
        assert!(page.contains("<span class=\"risk-high\">Auto Renewal Risk</span>"));
        assert!(!page.contains("Liability Risk"));
        assert!(!page.contains("Missing Exit Clause"));
    }

    #[test]
    fn medium_badges() {
        let page = result_page(&result(
            "A and B",
            [
                NOT_FOUND,
                "Liability clause detected. Check exposure.",
                "No clear exit clause found.",
            ],
        ));
        assert!(page.contains("<span class=\"risk-medium\">Liability Risk</span>"));
        assert!(page.contains("<span class=\"risk-medium\">Missing Exit Clause</span>"));
        assert!(!page.contains("class=\"risk-high\""));
    }

    #[test]
    fn result_page_has_all_cards() {
        let page = result_page(&result("A and B", [NOT_FOUND, NOT_FOUND, NOT_FOUND]));
        for heading in [
            "Parties",
            "Duration",
            "Payment Terms",
            "Termination",
            "Renewal",
            "Plain English Summary",
        ] {
            assert!(page.contains(&format!("<h3>{heading}</h3>")), "{heading}");
        }
        assert!(page.contains("Analysis Complete"));
        assert!(page.contains(PLAIN_ENGLISH_SUMMARY));
    }

    #[test]
    fn form_posts_multipart() {
        let page = form_page();
        assert!(page.contains("enctype=\"multipart/form-data\""));
        assert!(page.contains("name=\"file\""));
        assert!(page.contains("name=\"text\""));
        assert!(!page.contains("Analysis Complete"));
    }

    #[test]
    fn warning_page_escapes() {
        let page = warning_page("Please upload or paste contract text.");
        assert!(page.contains("<p class=\"warning\">Please upload or paste contract text.</p>"));
    }
}

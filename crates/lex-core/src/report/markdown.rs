//! Markdown report generation

use crate::analysis::CaseAnalysis;
use std::fmt::Write;

pub fn generate(analysis: &CaseAnalysis) -> String {
    let mut md = String::new();
    let summary = &analysis.summary;

    // writeln! into a String cannot fail
    let _ = writeln!(md, "# {}\n", summary.title);
    let _ = writeln!(md, "**Recommendation:** {}  ", summary.recommendation);
    let _ = writeln!(md, "**Confidence:** {}%  ", summary.confidence);
    let _ = writeln!(
        md,
        "**Estimated duration:** {} months\n",
        summary.duration_months
    );
    let _ = writeln!(md, "{}\n", summary.outcome_description);

    md.push_str("## Outcome Probabilities\n\n");
    md.push_str("| Outcome | Likelihood |\n|---|---|\n");
    let odds = analysis.outcomes;
    for (name, value) in [
        ("Win", odds.win_pct),
        ("Settlement", odds.settlement_pct),
        ("Loss", odds.loss_pct),
    ] {
        let _ = writeln!(md, "| {} | {}% |", name, value);
    }

    md.push_str("\n## Expected Timeline\n\n");
    for phase in analysis.sorted_timeline() {
        let _ = writeln!(
            md,
            "- **Month {}** {}: {}",
            phase.month, phase.phase, phase.description
        );
    }

    md.push_str("\n## Alternative Resolution\n\n");
    for alt in &analysis.alternatives {
        let marker = if alt.recommended { " (recommended)" } else { "" };
        let _ = writeln!(
            md,
            "### {}{}\n\n{}\n\nTimeframe: {}, success rate {}%\n",
            alt.method, marker, alt.description, alt.timeframe, alt.success_rate_pct
        );
    }

    md.push_str("## Similar Cases\n\n");
    for case in &analysis.similar_cases {
        let _ = writeln!(
            md,
            "- **{}** ({}, {}): {}",
            case.title, case.outcome, case.duration, case.description
        );
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::OutcomeSynthesizer;
    use crate::random::{ScriptedRandom, SeededRandom};

    #[test]
    fn test_markdown_sections() {
        let mut synthesizer = OutcomeSynthesizer::with_random(SeededRandom::new(2));
        let analysis = synthesizer.synthesize("family");
        let md = generate(&analysis);

        assert!(md.starts_with("# Case Analysis Summary"));
        assert!(md.contains("## Outcome Probabilities"));
        assert!(md.contains("## Expected Timeline"));
        assert!(md.contains("### Mediation (recommended)"));
        assert!(md.contains("### Arbitration\n"));
        assert!(md.contains("Singh vs. Property Developer Ltd."));
    }

    #[test]
    fn test_markdown_figures() {
        let mut synthesizer = OutcomeSynthesizer::with_random(ScriptedRandom::constant(0));
        let md = generate(&synthesizer.synthesize("criminal"));

        let recommendation = "**Recommendation:** Seek Specialized Legal Counsel";
        assert!(md.contains(recommendation));
        assert!(md.contains("**Estimated duration:** 24 months"));
        assert!(md.contains("| Win | 30% |"));
        assert!(md.contains("- **Month 1** Filing & Notices"));
    }

    #[test]
    fn test_timeline_rendered_in_month_order() {
        let mut synthesizer = OutcomeSynthesizer::with_random(SeededRandom::new(9));
        let mut analysis = synthesizer.synthesize("other");
        analysis.timeline.reverse();
        let md = generate(&analysis);

        let filing = md.find("Filing & Notices").unwrap();
        let judgment = md.find("Judgment:").unwrap();
        assert!(filing < judgment);
    }
}

//! Baseline analysis shared by every case type

use super::{Alternative, AnalysisSummary, CaseAnalysis, OutcomeOdds, SimilarCase, TimelinePhase};
use crate::random::{Band, RandomProvider};

pub const SUMMARY_TITLE: &str = "Case Analysis Summary";
pub const DEFAULT_RECOMMENDATION: &str = "Proceed with Court Case";
pub const DEFAULT_CONFIDENCE: u32 = 76;
pub const DEFAULT_OUTCOME_DESCRIPTION: &str =
    "Based on your case details, AI predicts a favorable outcome with moderate confidence. Similar cases have succeeded when strong documentary evidence was presented.";

pub const DURATION_MONTHS: Band = Band::new(6, 24);
pub const WIN_PCT: Band = Band::new(50, 40);
pub const SETTLEMENT_PCT: Band = Band::new(10, 30);
pub const LOSS_PCT: Band = Band::new(5, 20);

pub const MEDIATION: &str = "Mediation";
pub const ARBITRATION: &str = "Arbitration";
pub const LOK_ADALAT: &str = "Lok Adalat";

pub const FILING: &str = "Filing & Notices";
pub const INITIAL_HEARING: &str = "Initial Hearing";
pub const EVIDENCE: &str = "Evidence Submission";
pub const WITNESS: &str = "Witness Testimony";
pub const FINAL_ARGUMENTS: &str = "Final Arguments";
pub const JUDGMENT: &str = "Judgment";

/// Month bands of the four randomized phases
pub const EVIDENCE_MONTH: Band = Band::new(4, 3);
pub const WITNESS_MONTH: Band = Band::new(8, 3);
pub const FINAL_ARGUMENTS_MONTH: Band = Band::new(12, 4);
pub const JUDGMENT_MONTH: Band = Band::new(18, 5);

const PHASES: [(&str, &str); 6] = [
    (FILING, "Case filing, notice to opposition"),
    (INITIAL_HEARING, "Preliminary arguments, case scheduling"),
    (EVIDENCE, "Documentary evidence presented"),
    (WITNESS, "Witness examination, cross-examination"),
    (FINAL_ARGUMENTS, "Closing arguments from both sides"),
    (JUDGMENT, "Final verdict delivered"),
];

/// Build the baseline analysis.
///
/// Draw order: duration, win, settlement, loss, then the four phase months.
pub fn build<R: RandomProvider + ?Sized>(rng: &mut R) -> CaseAnalysis {
    let duration_months = DURATION_MONTHS.draw(rng);
    let outcomes = OutcomeOdds {
        win_pct: WIN_PCT.draw(rng),
        settlement_pct: SETTLEMENT_PCT.draw(rng),
        loss_pct: LOSS_PCT.draw(rng),
    };

    CaseAnalysis {
        summary: AnalysisSummary {
            title: SUMMARY_TITLE.to_string(),
            recommendation: DEFAULT_RECOMMENDATION.to_string(),
            confidence: DEFAULT_CONFIDENCE,
            duration_months,
            outcome_description: DEFAULT_OUTCOME_DESCRIPTION.to_string(),
        },
        outcomes,
        alternatives: alternatives(),
        timeline: timeline(rng),
        similar_cases: similar_cases(),
    }
}

fn alternatives() -> Vec<Alternative> {
    vec![
        alternative(
            MEDIATION,
            "A neutral third party would help you and the opposing party reach a mutually acceptable agreement.",
            "2-3 months",
            65,
            false,
        ),
        alternative(
            ARBITRATION,
            "An arbitrator would review evidence and make a binding decision, similar to a judge but in a private setting.",
            "3-5 months",
            58,
            false,
        ),
        alternative(
            LOK_ADALAT,
            "These 'People's Courts' offer a forum where disputes can be settled amicably and informally.",
            "1-2 months",
            72,
            true,
        ),
    ]
}

fn alternative(
    method: &str,
    description: &str,
    timeframe: &str,
    success_rate_pct: u32,
    recommended: bool,
) -> Alternative {
    Alternative {
        method: method.to_string(),
        description: description.to_string(),
        timeframe: timeframe.to_string(),
        success_rate_pct,
        recommended,
    }
}

fn timeline<R: RandomProvider + ?Sized>(rng: &mut R) -> Vec<TimelinePhase> {
    // drawn in phase order
    let months = [
        1,
        2,
        EVIDENCE_MONTH.draw(rng),
        WITNESS_MONTH.draw(rng),
        FINAL_ARGUMENTS_MONTH.draw(rng),
        JUDGMENT_MONTH.draw(rng),
    ];

    months
        .into_iter()
        .zip(PHASES)
        .map(|(month, (phase, description))| TimelinePhase {
            month,
            phase: phase.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn similar_cases() -> Vec<SimilarCase> {
    vec![
        similar_case(
            "Singh vs. Property Developer Ltd.",
            "Won",
            "18 months",
            "Land dispute with similar documentary evidence",
        ),
        similar_case(
            "Patel vs. Regional Authority",
            "Settled",
            "10 months",
            "Settled after strong initial arguments",
        ),
        similar_case(
            "Mehta inheritance dispute",
            "Partial win",
            "24 months",
            "Complex family property dispute",
        ),
    ]
}

fn similar_case(title: &str, outcome: &str, duration: &str, description: &str) -> SimilarCase {
    SimilarCase {
        title: title.to_string(),
        outcome: outcome.to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
    }
}

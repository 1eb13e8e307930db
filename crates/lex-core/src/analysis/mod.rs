//! Case outcome analysis
//!
//! A [`CaseAnalysis`] is built in two passes:
//! - a baseline with fixed text and randomized figures ([`baseline`])
//! - a case-type override that replaces bands and narrative ([`overrides`])

pub mod baseline;
pub mod overrides;
pub mod synthesizer;

pub use overrides::CaseOverride;
pub use synthesizer::{synthesize_with, OutcomeSynthesizer};

use serde::{Deserialize, Serialize};

/// Synthesized analysis of a single case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseAnalysis {
    pub summary: AnalysisSummary,
    pub outcomes: OutcomeOdds,
    pub alternatives: Vec<Alternative>,
    pub timeline: Vec<TimelinePhase>,
    pub similar_cases: Vec<SimilarCase>,
}

impl CaseAnalysis {
    /// Look up an alternative resolution method by name
    pub fn alternative(&self, method: &str) -> Option<&Alternative> {
        self.alternatives.iter().find(|a| a.method == method)
    }

    pub fn alternative_mut(&mut self, method: &str) -> Option<&mut Alternative> {
        self.alternatives.iter_mut().find(|a| a.method == method)
    }

    pub fn recommended_alternatives(&self) -> impl Iterator<Item = &Alternative> {
        self.alternatives.iter().filter(|a| a.recommended)
    }

    /// Timeline ordered by month. Ties keep their generation order.
    pub fn sorted_timeline(&self) -> Vec<TimelinePhase> {
        let mut timeline = self.timeline.clone();
        timeline.sort_by_key(|phase| phase.month);
        timeline
    }
}

/// Headline figures of an analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub title: String,
    pub recommendation: String,
    /// Percentage, 0-100
    pub confidence: u32,
    pub duration_months: u32,
    pub outcome_description: String,
}

/// Outcome likelihoods in percent.
///
/// Each figure is drawn on its own; they do not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeOdds {
    pub win_pct: u32,
    pub settlement_pct: u32,
    pub loss_pct: u32,
}

/// Out-of-court resolution method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub method: String,
    pub description: String,
    /// Range such as "2-3 months"
    pub timeframe: String,
    pub success_rate_pct: u32,
    pub recommended: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePhase {
    pub month: u32,
    pub phase: String,
    pub description: String,
}

/// Illustrative precedent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarCase {
    pub title: String,
    pub outcome: String,
    pub duration: String,
    pub description: String,
}

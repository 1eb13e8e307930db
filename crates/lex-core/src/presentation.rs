//! View-models for the results page charts and tables

use crate::analysis::CaseAnalysis;
use crate::{CoreError, CoreResult};
use serde::Serialize;

pub const WIN_COLOR: &str = "#4ade80";
pub const SETTLEMENT_COLOR: &str = "#60a5fa";
pub const LOSS_COLOR: &str = "#f87171";

/// Bar in the outcome probability chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeRow {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

pub fn outcome_rows(analysis: &CaseAnalysis) -> Vec<OutcomeRow> {
    let odds = analysis.outcomes;
    vec![
        OutcomeRow {
            name: "Win",
            value: odds.win_pct,
            color: WIN_COLOR,
        },
        OutcomeRow {
            name: "Settlement",
            value: odds.settlement_pct,
            color: SETTLEMENT_COLOR,
        },
        OutcomeRow {
            name: "Loss",
            value: odds.loss_pct,
            color: LOSS_COLOR,
        },
    ]
}

/// Colour tier for a percentage bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BarTone {
    High,
    Medium,
    Low,
}

impl BarTone {
    pub fn color(&self) -> &'static str {
        match self {
            BarTone::High => "#4ade80",
            BarTone::Medium => "#facc15",
            BarTone::Low => "#f87171",
        }
    }
}

pub fn bar_tone(value: u32) -> BarTone {
    if value >= 70 {
        BarTone::High
    } else if value >= 40 {
        BarTone::Medium
    } else {
        BarTone::Low
    }
}

/// Point on the timeline chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelinePoint {
    pub name: String,
    pub value: u32,
    pub phase: String,
    pub description: String,
}

/// Timeline sorted by month for charting
pub fn timeline_points(analysis: &CaseAnalysis) -> Vec<TimelinePoint> {
    analysis
        .sorted_timeline()
        .into_iter()
        .map(|item| TimelinePoint {
            name: format!("Month {}", item.month),
            value: item.month,
            phase: item.phase,
            description: item.description,
        })
        .collect()
}

/// Confidence above 60 gets the positive badge
pub fn confidence_is_favourable(confidence: u32) -> bool {
    confidence > 60
}

/// How much faster an alternative is than going to court
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Speedup {
    pub method: String,
    /// Court duration over the alternative's longest timeframe, rounded
    pub times_faster: u32,
    /// Progress bar fill, 0-100 for alternatives shorter than the case
    pub progress: f64,
}

/// Upper bound in months of a timeframe such as "2-3 months"
pub fn timeframe_upper_months(timeframe: &str) -> CoreResult<u32> {
    let upper = timeframe
        .split('-')
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .ok_or_else(|| timeframe_error(timeframe, "no month range"))?;

    match upper.parse::<u32>() {
        Ok(0) => Err(timeframe_error(timeframe, "upper bound is zero")),
        Ok(months) => Ok(months),
        Err(e) => Err(timeframe_error(timeframe, e)),
    }
}

fn timeframe_error(timeframe: &str, reason: impl std::fmt::Display) -> CoreError {
    CoreError::Parse(format!("Invalid timeframe '{}': {}", timeframe, reason))
}

pub fn alternative_speedups(analysis: &CaseAnalysis) -> CoreResult<Vec<Speedup>> {
    let duration = analysis.summary.duration_months as f64;

    analysis
        .alternatives
        .iter()
        .map(|alt| {
            let upper = timeframe_upper_months(&alt.timeframe)? as f64;
            Ok(Speedup {
                method: alt.method.clone(),
                times_faster: (duration / upper).round() as u32,
                progress: 100.0 * upper / duration,
            })
        })
        .collect()
}

/// Badge styling for a precedent's outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutcomeBadge {
    Positive,
    Neutral,
    Caution,
}

pub fn outcome_badge(outcome: &str) -> OutcomeBadge {
    match outcome {
        "Won" => OutcomeBadge::Positive,
        "Settled" => OutcomeBadge::Neutral,
        _ => OutcomeBadge::Caution,
    }
}

/// Backlog figures for one high court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CourtStatistic {
    pub name: &'static str,
    pub pending_cases: u32,
    pub disposed_last_year: u32,
}

pub const COURT_STATISTICS: [CourtStatistic; 4] = [
    CourtStatistic {
        name: "Delhi HC",
        pending_cases: 56721,
        disposed_last_year: 34125,
    },
    CourtStatistic {
        name: "Mumbai HC",
        pending_cases: 64572,
        disposed_last_year: 41209,
    },
    CourtStatistic {
        name: "Chennai HC",
        pending_cases: 48362,
        disposed_last_year: 32641,
    },
    CourtStatistic {
        name: "Kolkata HC",
        pending_cases: 42981,
        disposed_last_year: 27356,
    },
];

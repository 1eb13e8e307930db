//! Case-type specific adjustments
//!
//! Each recognized case type maps to one [`CaseOverride`] record. Unrecognized
//! case types have no record and keep the baseline.

use super::{baseline, CaseAnalysis};
use crate::case_type::CaseType;
use crate::random::{Band, RandomProvider};
use serde::Serialize;

/// Adjustments applied on top of the baseline analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaseOverride {
    pub duration_months: Band,
    pub win_pct: Option<Band>,
    pub settlement_pct: Option<Band>,
    pub recommend_mediation: bool,
    pub recommendation: Option<&'static str>,
    pub outcome_description: &'static str,
}

static PROPERTY: CaseOverride = CaseOverride {
    duration_months: Band::new(16, 20),
    win_pct: Some(Band::new(45, 30)),
    settlement_pct: None,
    recommend_mediation: false,
    recommendation: None,
    outcome_description: "Property disputes tend to be lengthy in the Indian judicial system, but your documentary evidence strengthens your position.",
};

static FAMILY: CaseOverride = CaseOverride {
    duration_months: Band::new(8, 12),
    win_pct: None,
    settlement_pct: None,
    recommend_mediation: true,
    recommendation: None,
    outcome_description: "Family matters can be emotionally taxing. Courts often encourage mediation for faster resolution and preserving relationships.",
};

static BUSINESS: CaseOverride = CaseOverride {
    duration_months: Band::new(12, 15),
    win_pct: None,
    settlement_pct: Some(Band::new(30, 40)),
    recommend_mediation: false,
    recommendation: None,
    outcome_description: "Contract disputes often hinge on documentation. Your case has merit, but consider arbitration for a quicker resolution while maintaining business relationships.",
};

static CRIMINAL: CaseOverride = CaseOverride {
    duration_months: Band::new(24, 30),
    win_pct: Some(Band::new(30, 30)),
    settlement_pct: None,
    recommend_mediation: false,
    recommendation: Some("Seek Specialized Legal Counsel"),
    outcome_description: "Criminal cases require expert representation. The evidence supports your position, but specialized legal expertise is strongly recommended.",
};

impl CaseOverride {
    /// Override record for a case type, if it has one
    pub fn for_case_type(case_type: &CaseType) -> Option<&'static CaseOverride> {
        match case_type {
            CaseType::Property => Some(&PROPERTY),
            CaseType::Family => Some(&FAMILY),
            CaseType::Business => Some(&BUSINESS),
            CaseType::Criminal => Some(&CRIMINAL),
            CaseType::Other(_) => None,
        }
    }

    /// Apply on top of a baseline.
    ///
    /// Draws duration first, then win, then settlement.
    pub fn apply<R: RandomProvider + ?Sized>(&self, analysis: &mut CaseAnalysis, rng: &mut R) {
        analysis.summary.duration_months = self.duration_months.draw(rng);

        if let Some(band) = self.win_pct {
            analysis.outcomes.win_pct = band.draw(rng);
        }
        if let Some(band) = self.settlement_pct {
            analysis.outcomes.settlement_pct = band.draw(rng);
        }

        if self.recommend_mediation {
            if let Some(mediation) = analysis.alternative_mut(baseline::MEDIATION) {
                mediation.recommended = true;
            }
        }

        if let Some(recommendation) = self.recommendation {
            analysis.summary.recommendation = recommendation.to_string();
        }
        analysis.summary.outcome_description = self.outcome_description.to_string();
    }
}

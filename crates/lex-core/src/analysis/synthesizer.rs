//! Outcome synthesizer

use super::{baseline, CaseAnalysis, CaseOverride};
use crate::case_type::CaseType;
use crate::random::{RandomProvider, ThreadRandom};

/// Produces a fresh [`CaseAnalysis`] per call.
///
/// Output varies between calls unless the random source is seeded.
pub struct OutcomeSynthesizer<R: RandomProvider = ThreadRandom> {
    rng: R,
}

impl OutcomeSynthesizer<ThreadRandom> {
    pub fn new() -> Self {
        Self::with_random(ThreadRandom)
    }
}

impl<R: RandomProvider> OutcomeSynthesizer<R> {
    pub fn with_random(rng: R) -> Self {
        Self { rng }
    }

    /// Synthesize an analysis for a raw case type value.
    ///
    /// Accepts any string; unrecognized values get the baseline.
    pub fn synthesize(&mut self, case_type: &str) -> CaseAnalysis {
        self.synthesize_case(&CaseType::parse(case_type))
    }

    pub fn synthesize_case(&mut self, case_type: &CaseType) -> CaseAnalysis {
        synthesize_with(&mut self.rng, case_type)
    }
}

impl Default for OutcomeSynthesizer<ThreadRandom> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the baseline and apply the override for `case_type`
pub fn synthesize_with<R: RandomProvider + ?Sized>(
    rng: &mut R,
    case_type: &CaseType,
) -> CaseAnalysis {
    let mut analysis = baseline::build(rng);

    if let Some(rule) = CaseOverride::for_case_type(case_type) {
        rule.apply(&mut analysis, rng);
    }

    tracing::debug!(
        "Synthesized {} analysis: {} months, win {}%",
        case_type,
        analysis.summary.duration_months,
        analysis.outcomes.win_pct
    );

    analysis
}

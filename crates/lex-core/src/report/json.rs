//! JSON report generation

use crate::analysis::CaseAnalysis;
use crate::CoreResult;

pub fn generate(analysis: &CaseAnalysis) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

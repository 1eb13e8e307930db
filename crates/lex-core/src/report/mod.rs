//! Report generation

pub mod json;
pub mod markdown;

use crate::analysis::CaseAnalysis;
use crate::CoreResult;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Markdown,
}

impl ReportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "json" => Some(ReportFormat::Json),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

/// Generate report in specified format
pub fn generate_report(analysis: &CaseAnalysis, format: ReportFormat) -> CoreResult<String> {
    match format {
        ReportFormat::Json => json::generate(analysis),
        ReportFormat::Markdown => Ok(markdown::generate(analysis)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!(ReportFormat::parse("JSON"), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::parse("md"), Some(ReportFormat::Markdown));
        assert_eq!(ReportFormat::parse("pdf"), None);
    }
}

//! Case Outcome Prediction Core
//!
//! This crate backs the case prediction site: it synthesizes mock case
//! outcome analyses, validates case intake, and drives the flow between the
//! intake form and the results view.

pub mod analysis;
pub mod case_type;
pub mod config;
pub mod intake;
pub mod presentation;
pub mod random;
pub mod report;
pub mod results;
pub mod transfer;
pub mod ui_state;

use thiserror::Error;

pub use analysis::{CaseAnalysis, OutcomeSynthesizer};
pub use case_type::{CaseType, Jurisdiction};
pub use config::LexConfig;
pub use intake::{
    submit_case, AttachmentPolicy, CaseSubmission, SubmissionError, SubmissionValidator,
};
pub use random::{RandomProvider, SeededRandom, ThreadRandom};
pub use results::{FlowEvent, ResultsFlow};
pub use transfer::{CaseTransfer, SessionBuffer, TransferBuffer, TransferError};

/// Route of the case intake form
pub const ANALYZE_CASE_ROUTE: &str = "/analyze-case";

/// Route of the results view
pub const CASE_RESULTS_ROUTE: &str = "/case-results";

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Please consent to AI analysis of your case")]
    ConsentRequired,

    #[error("Analysis not ready")]
    AnalysisNotReady,
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consent_message() {
        assert_eq!(
            CoreError::ConsentRequired.to_string(),
            "Please consent to AI analysis of your case"
        );
    }

    #[test]
    fn test_form_to_results_flow() {
        let mut buffer = SessionBuffer::new();
        let mut ui = ui_state::FormUiState::new();
        let files = vec![
            intake::FileDescriptor::new("agreement.pdf", "application/pdf", 200_000),
            intake::FileDescriptor::new("notes.txt", "text/plain", 100),
        ];
        let batch = AttachmentPolicy::default().screen(files);
        assert_eq!(batch.rejected.len(), 1);
        assert!(ui.begin_upload(&batch).is_some());
        ui.finish_upload(batch);

        let details = "Supplier breached a three-year contract and kept the security deposit.";
        let mut submission =
            CaseSubmission::new(CaseType::Business, Jurisdiction::HighCourt, details);
        submission.consent_to_analyze = true;

        let validator = SubmissionValidator::new();
        let route = submit_case(&validator, submission, ui.file_count(), &mut buffer);
        assert_eq!(route.unwrap(), CASE_RESULTS_ROUTE);

        let mut flow = ResultsFlow::new();
        let pending = flow.load(&buffer).unwrap();
        assert_eq!(pending.file_count, 1);
        assert!(flow.complete(&pending.ticket, &mut SeededRandom::new(77)));

        let analysis = flow.analysis().unwrap();
        assert!((30..70).contains(&analysis.outcomes.settlement_pct));
        assert!((12..27).contains(&analysis.summary.duration_months));

        let markdown = flow.download(report::ReportFormat::Markdown).unwrap();
        assert!(markdown.contains("consider arbitration"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let err: CoreError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, CoreError::Serialization(_)));
    }
}

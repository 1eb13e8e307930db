//! Case intake
//!
//! The record submitted by the analyze-case form, its validation rules and
//! attachment screening.

pub mod attachments;
pub mod validation;

pub use attachments::{
    AttachmentBatch, AttachmentPolicy, FileDescriptor, Rejection, ValidationError,
};
pub use validation::{FieldError, SubmissionValidator};

use crate::case_type::{CaseType, Jurisdiction};
use crate::transfer::{write_case_transfer, CaseTransfer, TransferBuffer};
use crate::{CoreError, CASE_RESULTS_ROUTE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Validate, check consent, then hand the submission to the results view.
///
/// Returns the route to navigate to.
pub fn submit_case<B: TransferBuffer + ?Sized>(
    validator: &SubmissionValidator,
    submission: CaseSubmission,
    file_count: usize,
    buffer: &mut B,
) -> Result<&'static str, SubmissionError> {
    if let Err(errors) = validator.validate(&submission) {
        return Err(SubmissionError::Invalid(errors));
    }
    validator.check_consent(&submission)?;

    tracing::info!(
        "Submitting {} case with {} attachments",
        submission.case_type,
        file_count
    );
    let transfer = CaseTransfer {
        form_data: submission,
        file_count,
    };
    write_case_transfer(buffer, &transfer)?;
    Ok(CASE_RESULTS_ROUTE)
}

/// Form submission as written to the transfer buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub case_type: CaseType,
    pub court_jurisdiction: String,
    pub case_details: String,

    #[serde(default)]
    pub has_previous_hearings: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_hearings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing_outcome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_name: Option<String>,

    #[serde(default)]
    pub legal_arguments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_legal_argument: Option<String>,

    #[serde(default)]
    pub consent_to_analyze: bool,
}

impl CaseSubmission {
    /// Submission with only the mandatory fields filled
    pub fn new(
        case_type: CaseType,
        jurisdiction: Jurisdiction,
        case_details: impl Into<String>,
    ) -> Self {
        Self {
            full_name: None,
            email: None,
            phone: None,
            case_type,
            court_jurisdiction: jurisdiction.as_str().to_string(),
            case_details: case_details.into(),
            has_previous_hearings: false,
            number_of_hearings: None,
            hearing_outcome: None,
            judge_name: None,
            legal_arguments: Vec::new(),
            other_legal_argument: None,
            consent_to_analyze: false,
        }
    }

    pub fn with_consent(mut self, consent: bool) -> Self {
        self.consent_to_analyze = consent;
        self
    }

    pub fn jurisdiction(&self) -> Option<Jurisdiction> {
        Jurisdiction::parse(&self.court_jurisdiction)
    }
}

/// Outcome of an earlier hearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HearingOutcome {
    Pending,
    Rejected,
    PartialJudgment,
    Adjourned,
}

impl HearingOutcome {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(HearingOutcome::Pending),
            "rejected" => Some(HearingOutcome::Rejected),
            "partialJudgment" => Some(HearingOutcome::PartialJudgment),
            "adjourned" => Some(HearingOutcome::Adjourned),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HearingOutcome::Pending => "Pending",
            HearingOutcome::Rejected => "Rejected",
            HearingOutcome::PartialJudgment => "Partial Judgment",
            HearingOutcome::Adjourned => "Adjourned",
        }
    }
}

/// Argument the user believes favours their case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegalArgument {
    LackOfEvidence,
    LegalTechnicalities,
    DocumentaryProof,
    Precedents,
    WeakOpposition,
    Other,
}

impl LegalArgument {
    pub const ALL: [LegalArgument; 6] = [
        LegalArgument::LackOfEvidence,
        LegalArgument::LegalTechnicalities,
        LegalArgument::DocumentaryProof,
        LegalArgument::Precedents,
        LegalArgument::WeakOpposition,
        LegalArgument::Other,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == value)
    }

    pub fn id(&self) -> &'static str {
        match self {
            LegalArgument::LackOfEvidence => "lackOfEvidence",
            LegalArgument::LegalTechnicalities => "legalTechnicalities",
            LegalArgument::DocumentaryProof => "documentaryProof",
            LegalArgument::Precedents => "precedents",
            LegalArgument::WeakOpposition => "weakOpposition",
            LegalArgument::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LegalArgument::LackOfEvidence => "Lack of evidence from opposition",
            LegalArgument::LegalTechnicalities => {
                "Legal technicalities (jurisdiction, improper filing)"
            }
            LegalArgument::DocumentaryProof => "Strong documentary proof",
            LegalArgument::Precedents => "Precedents favoring the case",
            LegalArgument::WeakOpposition => "Weak opposition argument",
            LegalArgument::Other => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::{read_case_transfer, SessionBuffer};

    fn details() -> String {
        "The tenant has not paid rent for eight months and refuses to vacate.".to_string()
    }

    fn consenting(case_type: CaseType, details: impl Into<String>) -> CaseSubmission {
        let mut submission = CaseSubmission::new(case_type, Jurisdiction::DistrictCourt, details);
        submission.consent_to_analyze = true;
        submission
    }

    #[test]
    fn test_submit_writes_transfer() {
        let validator = SubmissionValidator::new();
        let mut buffer = SessionBuffer::new();
        let submission = consenting(CaseType::Property, details());

        let route = submit_case(&validator, submission.clone(), 3, &mut buffer);
        assert_eq!(route.unwrap(), CASE_RESULTS_ROUTE);

        let transfer = read_case_transfer(&buffer).unwrap();
        assert_eq!(transfer.form_data, submission);
        assert_eq!(transfer.file_count, 3);
    }

    #[test]
    fn test_submit_requires_consent() {
        let validator = SubmissionValidator::new();
        let mut buffer = SessionBuffer::new();
        let submission = CaseSubmission::new(CaseType::Family, Jurisdiction::HighCourt, details());

        let result = submit_case(&validator, submission, 0, &mut buffer);
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            SubmissionError::Core(CoreError::ConsentRequired)
        ));
        assert_eq!(
            err.to_string(),
            "Please consent to AI analysis of your case"
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_submit_rejects_invalid_fields() {
        let validator = SubmissionValidator::new();
        let mut buffer = SessionBuffer::new();
        let submission = consenting(CaseType::Family, "too short");

        match submit_case(&validator, submission, 0, &mut buffer) {
            Err(SubmissionError::Invalid(errors)) => assert_eq!(errors[0].field, "caseDetails"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_deserialize_minimal_form() {
        let json = r#"{
            "caseType": "family",
            "courtJurisdiction": "districtCourt",
            "caseDetails": "details"
        }"#;
        let submission: CaseSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.case_type, CaseType::Family);
        assert_eq!(submission.jurisdiction(), Some(Jurisdiction::DistrictCourt));
        assert!(!submission.consent_to_analyze);
        assert!(!submission.has_previous_hearings);
        assert!(submission.legal_arguments.is_empty());
    }

    #[test]
    fn test_serialize_skips_empty_optionals() {
        let submission = consenting(CaseType::Business, "x");
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["caseType"], "business");
        assert_eq!(json["courtJurisdiction"], "districtCourt");
        assert_eq!(json["consentToAnalyze"], true);
        assert!(json.get("fullName").is_none());
        assert!(json.get("numberOfHearings").is_none());
    }

    #[test]
    fn test_hearing_outcome_parse() {
        assert_eq!(
            HearingOutcome::parse("partialJudgment"),
            Some(HearingOutcome::PartialJudgment)
        );
        assert_eq!(HearingOutcome::parse("won"), None);
        assert_eq!(HearingOutcome::Adjourned.label(), "Adjourned");
    }

    #[test]
    fn test_legal_argument_ids() {
        for argument in LegalArgument::ALL {
            assert_eq!(LegalArgument::parse(argument.id()), Some(argument));
        }
        assert_eq!(LegalArgument::parse("bribery"), None);
    }
}

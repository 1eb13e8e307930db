//! Submission validation

use super::{CaseSubmission, HearingOutcome, LegalArgument};
use crate::config::IntakeLimits;
use crate::{CoreError, CoreResult};
use regex::Regex;
use serde::Serialize;

/// A problem with a single form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Validates case submissions against the intake limits
pub struct SubmissionValidator {
    limits: IntakeLimits,
    email_regex: Regex,
}

impl SubmissionValidator {
    pub fn new() -> Self {
        Self::with_limits(IntakeLimits::default())
    }

    pub fn with_limits(limits: IntakeLimits) -> Self {
        Self {
            limits,
            email_regex: Regex::new(EMAIL_PATTERN).expect("email pattern compiles"),
        }
    }

    pub fn limits(&self) -> &IntakeLimits {
        &self.limits
    }

    /// Check every field, collecting all problems
    pub fn validate(&self, submission: &CaseSubmission) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Some(email) = submission.email.as_deref() {
            if !self.email_regex.is_match(email) {
                errors.push(FieldError::new("email", "Invalid email"));
            }
        }

        if submission.case_type.as_str().is_empty() {
            errors.push(FieldError::new("caseType", "Please select a case type"));
        }

        if submission.jurisdiction().is_none() {
            errors.push(FieldError::new(
                "courtJurisdiction",
                "Please select court jurisdiction",
            ));
        }

        let details_len = submission.case_details.chars().count();
        let min = self.limits.min_details_chars;
        let max = self.limits.max_details_chars;
        if details_len < min {
            errors.push(FieldError::new(
                "caseDetails",
                format!("Case details must be at least {} characters", min),
            ));
        } else if details_len > max {
            errors.push(FieldError::new(
                "caseDetails",
                format!("Case details must not exceed {} characters", max),
            ));
        }

        // hearing fields stay filled in when the section is switched off
        let outcome = submission
            .hearing_outcome
            .as_deref()
            .filter(|_| submission.has_previous_hearings);
        if let Some(outcome) = outcome {
            if HearingOutcome::parse(outcome).is_none() {
                errors.push(FieldError::new(
                    "hearingOutcome",
                    format!("Unknown hearing outcome: {}", outcome),
                ));
            }
        }

        for argument in &submission.legal_arguments {
            if LegalArgument::parse(argument).is_none() {
                errors.push(FieldError::new(
                    "legalArguments",
                    format!("Unknown legal argument: {}", argument),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Consent gates submission on its own, after field validation
    pub fn check_consent(&self, submission: &CaseSubmission) -> CoreResult<()> {
        if submission.consent_to_analyze {
            Ok(())
        } else {
            Err(CoreError::ConsentRequired)
        }
    }
}

impl Default for SubmissionValidator {
    fn default() -> Self {
        Self::new()
    }
}

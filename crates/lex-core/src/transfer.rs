//! Session-scoped transfer buffer between the intake form and results view

use crate::intake::CaseSubmission;
use crate::CoreResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Key the intake form writes its submission under
pub const CASE_DATA_KEY: &str = "caseData";

/// String key/value store living as long as the browser tab
pub trait TransferBuffer {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory transfer buffer
#[derive(Debug, Clone, Default)]
pub struct SessionBuffer {
    entries: HashMap<String, String>,
}

impl SessionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TransferBuffer for SessionBuffer {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Payload stored under [`CASE_DATA_KEY`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseTransfer {
    pub form_data: CaseSubmission,
    pub file_count: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("No case data found")]
    MissingInput,

    #[error("Malformed case data: {0}")]
    CorruptInput(String),
}

/// Write the submission for the results view
pub fn write_case_transfer<B: TransferBuffer + ?Sized>(
    buffer: &mut B,
    transfer: &CaseTransfer,
) -> CoreResult<()> {
    let json = serde_json::to_string(transfer)?;
    buffer.set(CASE_DATA_KEY, json);
    Ok(())
}

/// Read the submission without consuming it
pub fn read_case_transfer<B: TransferBuffer + ?Sized>(
    buffer: &B,
) -> Result<CaseTransfer, TransferError> {
    let raw = match buffer.get(CASE_DATA_KEY) {
        Some(raw) => raw,
        None => return Err(TransferError::MissingInput),
    };
    serde_json::from_str(&raw)
        .map_err(|e| TransferError::CorruptInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case_type::{CaseType, Jurisdiction};

    fn transfer() -> CaseTransfer {
        let submission =
            CaseSubmission::new(CaseType::Criminal, Jurisdiction::SupremeCourt, "details");
        CaseTransfer {
            form_data: submission.with_consent(true),
            file_count: 2,
        }
    }

    #[test]
    fn test_write_then_read() {
        let mut buffer = SessionBuffer::new();
        write_case_transfer(&mut buffer, &transfer()).unwrap();
        assert_eq!(read_case_transfer(&buffer).unwrap(), transfer());
        // reading leaves the entry in place
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_wire_shape() {
        let mut buffer = SessionBuffer::new();
        write_case_transfer(&mut buffer, &transfer()).unwrap();
        let stored = buffer.get(CASE_DATA_KEY).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(raw["fileCount"], 2);
        assert_eq!(raw["formData"]["caseType"], "criminal");
    }

    #[test]
    fn test_missing_entry() {
        let buffer = SessionBuffer::new();
        assert_eq!(
            read_case_transfer(&buffer),
            Err(TransferError::MissingInput)
        );
    }

    #[test]
    fn test_corrupt_entries() {
        let mut buffer = SessionBuffer::new();
        let payloads = [
            "not json",
            "{}",
            r#"{"formData": {"caseType": "family"}, "fileCount": 0}"#,
            "[]",
        ];
        for raw in payloads {
            buffer.set(CASE_DATA_KEY, raw.to_string());
            assert!(matches!(
                read_case_transfer(&buffer),
                Err(TransferError::CorruptInput(_))
            ));
        }
    }

    #[test]
    fn test_accepts_form_written_payload() {
        let mut buffer = SessionBuffer::new();
        let payload = r#"{"formData":{"caseType":"property","courtJurisdiction":"highCourt","caseDetails":"x","consentToAnalyze":true,"legalArguments":["precedents"]},"fileCount":1}"#;
        buffer.set(CASE_DATA_KEY, payload.to_string());
        let transfer = read_case_transfer(&buffer).unwrap();
        assert_eq!(transfer.form_data.case_type, CaseType::Property);
        assert_eq!(transfer.file_count, 1);
    }
}

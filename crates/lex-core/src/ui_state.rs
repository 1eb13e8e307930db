//! Intake form UI state
//!
//! One explicit record owned by the form surface instead of scattered
//! component flags.

use crate::config::{Delays, LexConfig};
use crate::intake::{AttachmentBatch, FileDescriptor};
use crate::results::Notification;
use serde::Serialize;
use std::time::Duration;

/// Collapsible form section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormSection {
    PersonalDetails,
    CaseInformation,
    Documents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormUiState {
    pub expanded: Option<FormSection>,
    pub uploads: Vec<FileDescriptor>,
    pub uploading: bool,
    pub analyzing: bool,
    #[serde(skip)]
    delays: Delays,
}

impl Default for FormUiState {
    fn default() -> Self {
        Self::with_config(&LexConfig::default())
    }
}

impl FormUiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &LexConfig) -> Self {
        Self {
            expanded: Some(FormSection::CaseInformation),
            uploads: Vec::new(),
            uploading: false,
            analyzing: false,
            delays: config.delays.clone(),
        }
    }

    /// Open `section`, or collapse it if it is already open
    pub fn toggle(&mut self, section: FormSection) {
        self.expanded = if self.expanded == Some(section) {
            None
        } else {
            Some(section)
        };
    }

    pub fn is_expanded(&self, section: FormSection) -> bool {
        self.expanded == Some(section)
    }

    /// Start the upload pause and return its length.
    ///
    /// Returns `None` when nothing in the batch was accepted.
    pub fn begin_upload(&mut self, batch: &AttachmentBatch) -> Option<Duration> {
        if !batch.has_accepted() {
            return None;
        }
        self.uploading = true;
        Some(self.delays.upload())
    }

    /// Append accepted files once the upload pause ends
    pub fn finish_upload(&mut self, batch: AttachmentBatch) -> Option<Notification> {
        self.uploading = false;
        if !batch.has_accepted() {
            return None;
        }
        let count = batch.accepted.len();
        self.uploads.extend(batch.accepted);
        Some(Notification::success(format!(
            "{} file(s) uploaded successfully.",
            count
        )))
    }

    pub fn remove_upload(&mut self, index: usize) -> Option<Notification> {
        if index >= self.uploads.len() {
            return None;
        }
        self.uploads.remove(index);
        Some(Notification::info("File removed"))
    }

    /// Start the analysis pause shown before leaving for the results view
    pub fn begin_analysis(&mut self) -> Duration {
        self.analyzing = true;
        self.delays.submit()
    }

    pub fn finish_analysis(&mut self) {
        self.analyzing = false;
    }

    /// Submission is blocked while an upload or analysis is in flight
    pub fn is_busy(&self) -> bool {
        self.uploading || self.analyzing
    }

    pub fn file_count(&self) -> usize {
        self.uploads.len()
    }
}

//! Attachment screening

use crate::config::IntakeLimits;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// MIME types accepted by default
pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/jpeg",
    "image/png",
];

/// File as reported by the file picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rejection {
    UnsupportedType,
    TooLarge,
}

/// Per-file rejection with a user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    pub file_name: String,
    pub kind: Rejection,
    pub message: String,
}

/// Result of screening a selection of files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttachmentBatch {
    pub accepted: Vec<FileDescriptor>,
    pub rejected: Vec<ValidationError>,
}

impl AttachmentBatch {
    pub fn has_accepted(&self) -> bool {
        !self.accepted.is_empty()
    }
}

/// Which files the intake form accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentPolicy {
    pub accepted_types: Vec<String>,
    /// Inclusive
    pub max_bytes: u64,
}

impl Default for AttachmentPolicy {
    fn default() -> Self {
        Self {
            accepted_types: ACCEPTED_MIME_TYPES.iter().map(|t| t.to_string()).collect(),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

impl AttachmentPolicy {
    pub fn with_max_bytes(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            ..Self::default()
        }
    }

    pub fn from_limits(limits: &IntakeLimits) -> Self {
        Self::with_max_bytes(limits.max_attachment_bytes)
    }

    /// Check one file. Type is checked before size.
    pub fn check(&self, file: &FileDescriptor) -> Result<(), ValidationError> {
        if !self.accepted_types.iter().any(|t| t == &file.mime_type) {
            return Err(ValidationError {
                file_name: file.name.clone(),
                kind: Rejection::UnsupportedType,
                message: format!(
                    "Invalid file type: {}. Only PDF, DOC, DOCX, JPG, and PNG are allowed.",
                    file.name
                ),
            });
        }

        if file.size_bytes > self.max_bytes {
            return Err(ValidationError {
                file_name: file.name.clone(),
                kind: Rejection::TooLarge,
                message: format!(
                    "File too large: {}. Maximum file size is {}.",
                    file.name,
                    size_label(self.max_bytes)
                ),
            });
        }

        Ok(())
    }

    /// Split a selection into accepted files and rejections
    pub fn screen(&self, files: impl IntoIterator<Item = FileDescriptor>) -> AttachmentBatch {
        let mut batch = AttachmentBatch::default();

        for file in files {
            match self.check(&file) {
                Ok(()) => batch.accepted.push(file),
                Err(rejection) => {
                    tracing::warn!(
                        "Rejected attachment {}: {:?}",
                        rejection.file_name,
                        rejection.kind
                    );
                    batch.rejected.push(rejection);
                }
            }
        }

        batch
    }
}

/// Whole megabytes render as `5MB`, anything else in kilobytes
fn size_label(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;

    if bytes >= MB && bytes % MB == 0 {
        format!("{}MB", bytes / MB)
    } else if bytes >= KB {
        format!("{}KB", bytes / KB)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn test_accepts_supported_types() {
        let policy = AttachmentPolicy::default();
        for mime in ACCEPTED_MIME_TYPES {
            assert!(policy.check(&FileDescriptor::new("doc", *mime, MB)).is_ok());
        }
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let policy = AttachmentPolicy::default();
        let at_limit = FileDescriptor::new("deed.pdf", "application/pdf", 5 * MB);
        assert!(policy.check(&at_limit).is_ok());

        let over_limit = FileDescriptor::new("deed.pdf", "application/pdf", 5 * MB + 1);
        let err = policy.check(&over_limit).unwrap_err();
        assert_eq!(err.kind, Rejection::TooLarge);
        assert_eq!(
            err.message,
            "File too large: deed.pdf. Maximum file size is 5MB."
        );
    }

    #[test]
    fn test_type_checked_before_size() {
        let policy = AttachmentPolicy::default();
        let err = policy
            .check(&FileDescriptor::new("clip.mp4", "video/mp4", 50 * MB))
            .unwrap_err();
        assert_eq!(err.kind, Rejection::UnsupportedType);
        assert_eq!(
            err.to_string(),
            "Invalid file type: clip.mp4. Only PDF, DOC, DOCX, JPG, and PNG are allowed."
        );
    }

    #[test]
    fn test_screen_keeps_order_and_is_not_fatal() {
        let policy = AttachmentPolicy::default();
        let batch = policy.screen(vec![
            FileDescriptor::new("a.pdf", "application/pdf", 10),
            FileDescriptor::new("b.gif", "image/gif", 10),
            FileDescriptor::new("c.png", "image/png", 6 * MB),
            FileDescriptor::new("d.jpg", "image/jpeg", 10),
        ]);

        let names: Vec<&str> = batch.accepted.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "d.jpg"]);
        assert_eq!(batch.rejected.len(), 2);
        assert_eq!(batch.rejected[0].file_name, "b.gif");
        assert_eq!(batch.rejected[1].kind, Rejection::TooLarge);
        assert!(batch.has_accepted());
    }

    #[test]
    fn test_screen_empty_selection() {
        let batch = AttachmentPolicy::default().screen(Vec::new());
        assert!(!batch.has_accepted());
        assert!(batch.rejected.is_empty());
    }

    #[test]
    fn test_custom_limit_message() {
        let policy = AttachmentPolicy::with_max_bytes(2 * MB);
        let err = policy
            .check(&FileDescriptor::new("scan.png", "image/png", 3 * MB))
            .unwrap_err();
        assert!(err.message.ends_with("Maximum file size is 2MB."));
    }

    #[test]
    fn test_sub_megabyte_limit_message() {
        let policy = AttachmentPolicy::with_max_bytes(512 * 1024);
        let err = policy
            .check(&FileDescriptor::new("scan.png", "image/png", MB))
            .unwrap_err();
        assert!(err.message.ends_with("Maximum file size is 512KB."));

        let tiny = AttachmentPolicy::with_max_bytes(100);
        let err = tiny
            .check(&FileDescriptor::new("scan.png", "image/png", 101))
            .unwrap_err();
        assert!(err.message.ends_with("Maximum file size is 100 bytes."));
    }

    #[test]
    fn test_policy_from_limits() {
        let policy = AttachmentPolicy::from_limits(&IntakeLimits::default());
        assert_eq!(policy, AttachmentPolicy::default());
    }
}

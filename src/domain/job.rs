use chrono::{DateTime, Utc};

use super::{JobName, JobStatus, MediaFormat, MediaUri, StoragePath};

#[derive(Debug, Clone)]
pub struct Job {
    pub name: JobName,
    pub media: MediaUri,
    pub output: StoragePath,
    pub media_format: MediaFormat,
    pub language_code: String,
    pub status: JobStatus,
    pub failure_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Job {
    pub fn new(
        media: MediaUri,
        output: StoragePath,
        media_format: MediaFormat,
        language_code: impl Into<String>,
    ) -> Self {
        Self {
            name: JobName::generate(),
            media,
            output,
            media_format,
            language_code: language_code.into(),
            status: JobStatus::Queued,
            failure_reason: None,
            created_at: Utc::now(),
        }
    }
}

/// Status of a job as last reported by the recognition service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSnapshot {
    pub status: JobStatus,
    pub failure_reason: Option<String>,
}

impl JobSnapshot {
    pub fn new(status: JobStatus) -> Self {
        Self {
            status,
            failure_reason: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            status: JobStatus::Failed,
            failure_reason: Some(reason.into()),
        }
    }
}

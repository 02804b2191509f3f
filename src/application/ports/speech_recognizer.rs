use async_trait::async_trait;

use crate::domain::{Job, JobName, JobSnapshot};

use super::ServiceFailure;

#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Starts an asynchronous recognition job. The service writes the
    /// transcript to `job.output` once the job completes.
    async fn start_job(&self, job: &Job) -> Result<(), SpeechRecognizerError>;

    async fn job_status(&self, name: &JobName) -> Result<JobSnapshot, SpeechRecognizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechRecognizerError {
    #[error("recognition endpoint unreachable: {0}")]
    Unreachable(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("job not found: {0}")]
    JobNotFound(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ServiceFailure for SpeechRecognizerError {
    fn is_unreachable(&self) -> bool {
        matches!(self, SpeechRecognizerError::Unreachable(_))
    }
}

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::application::ports::{SpeechRecognizer, SpeechRecognizerError};
use crate::domain::{Job, JobName, JobStatus, MediaFormat, MediaUri, StoragePath};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Submits recognition jobs and waits for them to reach a terminal state.
///
/// Status is queried at a fixed interval with no jitter or backoff. Without
/// `max_wait` the wait is unbounded and ends only when the service reports
/// COMPLETED or FAILED.
pub struct JobPoller {
    recognizer: Arc<dyn SpeechRecognizer>,
    poll_interval: Duration,
    max_wait: Option<Duration>,
}

impl JobPoller {
    pub fn new(recognizer: Arc<dyn SpeechRecognizer>, poll_interval: Duration) -> Self {
        Self {
            recognizer,
            poll_interval,
            max_wait: None,
        }
    }

    pub fn with_max_wait(mut self, max_wait: Option<Duration>) -> Self {
        self.max_wait = max_wait;
        self
    }

    pub async fn submit(
        &self,
        media: MediaUri,
        output: StoragePath,
        media_format: MediaFormat,
        language_code: &str,
    ) -> Result<Job, PollError> {
        let job = Job::new(media, output, media_format, language_code);

        tracing::info!(
            job = %job.name,
            bucket = job.media.bucket(),
            media = %job.media.path(),
            output = %job.output,
            format = %job.media_format,
            language = %job.language_code,
            created_at = %job.created_at,
            "Submitting recognition job"
        );

        self.recognizer.start_job(&job).await?;
        Ok(job)
    }

    /// Polls until `job` is terminal, updating its status in place.
    pub async fn await_completion(&self, job: &mut Job) -> Result<JobStatus, PollError> {
        let started = Instant::now();
        let mut queries: u32 = 0;

        loop {
            let snapshot = self.recognizer.job_status(&job.name).await?;
            queries += 1;

            if snapshot.status != job.status {
                tracing::debug!(from = %job.status, to = %snapshot.status, "Job status transition");
            }
            job.status = snapshot.status;
            job.failure_reason = snapshot.failure_reason;

            if job.status.is_terminal() {
                tracing::info!(
                    status = %job.status,
                    queries,
                    elapsed_secs = started.elapsed().as_secs(),
                    "Recognition job finished"
                );
                return Ok(job.status);
            }

            if let Some(max_wait) = self.max_wait {
                if started.elapsed() >= max_wait {
                    return Err(PollError::TimedOut {
                        job: job.name.clone(),
                        waited: started.elapsed(),
                    });
                }
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("speech recognizer: {0}")]
    Recognizer(#[from] SpeechRecognizerError),
    #[error("job {job} still running after {waited:?}")]
    TimedOut { job: JobName, waited: Duration },
}

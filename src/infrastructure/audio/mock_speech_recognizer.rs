use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bytes::Bytes;

use crate::application::ports::{SpeechRecognizer, SpeechRecognizerError, StagingStore};
use crate::domain::{Job, JobName, JobSnapshot, JobStatus};

/// Offline recognizer for scaffold mode.
///
/// Reports IN_PROGRESS for `pending_polls` queries, then writes the canned
/// transcript to the job's output and reports COMPLETED.
pub struct MockSpeechRecognizer {
    store: Arc<dyn StagingStore>,
    transcript: String,
    pending_polls: u32,
    jobs: Mutex<HashMap<JobName, (Job, u32)>>,
}

impl MockSpeechRecognizer {
    pub fn new(store: Arc<dyn StagingStore>, transcript: String, pending_polls: u32) -> Self {
        Self {
            store,
            transcript,
            pending_polls,
            jobs: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for MockSpeechRecognizer {
    async fn start_job(&self, job: &Job) -> Result<(), SpeechRecognizerError> {
        let mut jobs = self
            .jobs
            .lock()
            .map_err(|e| SpeechRecognizerError::ApiRequestFailed(e.to_string()))?;
        jobs.insert(job.name.clone(), (job.clone(), 0));
        Ok(())
    }

    async fn job_status(&self, name: &JobName) -> Result<JobSnapshot, SpeechRecognizerError> {
        let (job, polls) = {
            let mut jobs = self
                .jobs
                .lock()
                .map_err(|e| SpeechRecognizerError::ApiRequestFailed(e.to_string()))?;
            let entry = jobs
                .get_mut(name)
                .ok_or_else(|| SpeechRecognizerError::JobNotFound(name.to_string()))?;
            entry.1 += 1;
            (entry.0.clone(), entry.1)
        };

        if polls <= self.pending_polls {
            return Ok(JobSnapshot::new(JobStatus::InProgress));
        }

        self.store
            .put(
                &job.output,
                Bytes::from(self.transcript.clone()),
                Some("text/plain"),
            )
            .await
            .map_err(|e| SpeechRecognizerError::ApiRequestFailed(e.to_string()))?;

        Ok(JobSnapshot::new(JobStatus::Completed))
    }
}

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{SpeechRecognizer, SpeechRecognizerError};
use crate::domain::{Job, JobName, JobSnapshot, JobStatus};
use crate::infrastructure::http::{self, HttpFailure};

/// Recognition service reached over a JSON job API.
pub struct RestSpeechRecognizer {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestSpeechRecognizer {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
            api_key,
        }
    }
}

#[derive(Serialize)]
struct StartJobRequest<'a> {
    job_name: &'a str,
    media_uri: String,
    media_format: &'a str,
    language_code: &'a str,
    output_key: &'a str,
}

#[derive(Deserialize)]
struct JobStatusResponse {
    status: String,
    #[serde(default)]
    failure_reason: Option<String>,
}

impl From<HttpFailure> for SpeechRecognizerError {
    fn from(failure: HttpFailure) -> Self {
        match failure {
            HttpFailure::Unreachable(m) => SpeechRecognizerError::Unreachable(m),
            HttpFailure::Decode(m) => SpeechRecognizerError::InvalidResponse(m),
            HttpFailure::Status(StatusCode::NOT_FOUND, body) => {
                SpeechRecognizerError::JobNotFound(body)
            }
            other => SpeechRecognizerError::ApiRequestFailed(other.message()),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for RestSpeechRecognizer {
    async fn start_job(&self, job: &Job) -> Result<(), SpeechRecognizerError> {
        let url = http::endpoint(&self.base_url, "transcription-jobs");
        let body = StartJobRequest {
            job_name: job.name.as_str(),
            media_uri: job.media.to_string(),
            media_format: job.media_format.as_str(),
            language_code: &job.language_code,
            output_key: job.output.as_str(),
        };

        tracing::debug!(url = %url, job = %job.name, "Starting recognition job");
        http::post_json(&self.client, &url, self.api_key.as_deref(), &body).await?;
        Ok(())
    }

    async fn job_status(&self, name: &JobName) -> Result<JobSnapshot, SpeechRecognizerError> {
        let url = http::endpoint(&self.base_url, &format!("transcription-jobs/{}", name));
        let response = http::get(&self.client, &url, self.api_key.as_deref()).await?;
        let body: JobStatusResponse = http::decode(response).await?;

        let status: JobStatus = body
            .status
            .parse()
            .map_err(SpeechRecognizerError::InvalidResponse)?;

        Ok(JobSnapshot {
            status,
            failure_reason: body.failure_reason,
        })
    }
}

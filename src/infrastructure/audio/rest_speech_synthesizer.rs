use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::application::ports::{SpeechSynthesizer, SpeechSynthesizerError};
use crate::domain::AudioFormat;
use crate::infrastructure::http::{self, HttpFailure};
use crate::infrastructure::observability::preview_text;

pub struct RestSpeechSynthesizer {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestSpeechSynthesizer {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
            api_key,
        }
    }
}

#[derive(Serialize)]
struct SynthesizeRequest<'a> {
    text: &'a str,
    voice_id: &'a str,
    output_format: &'a str,
}

impl From<HttpFailure> for SpeechSynthesizerError {
    fn from(failure: HttpFailure) -> Self {
        match failure {
            HttpFailure::Unreachable(m) => SpeechSynthesizerError::Unreachable(m),
            HttpFailure::RateLimited => SpeechSynthesizerError::RateLimited,
            other => SpeechSynthesizerError::ApiRequestFailed(other.message()),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for RestSpeechSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        format: AudioFormat,
    ) -> Result<Bytes, SpeechSynthesizerError> {
        let url = http::endpoint(&self.base_url, "synthesize");
        let body = SynthesizeRequest {
            text,
            voice_id,
            output_format: format.as_str(),
        };

        tracing::debug!(voice = voice_id, text = %preview_text(text), "Sending text to synthesizer");

        let response = match http::post_json(&self.client, &url, self.api_key.as_deref(), &body)
            .await
        {
            Ok(response) => response,
            Err(HttpFailure::Status(StatusCode::PAYLOAD_TOO_LARGE, _)) => {
                return Err(SpeechSynthesizerError::TextTooLong(text.chars().count()));
            }
            Err(other) => return Err(other.into()),
        };

        response
            .bytes()
            .await
            .map_err(|e| SpeechSynthesizerError::ApiRequestFailed(format!("body: {}", e)))
    }
}

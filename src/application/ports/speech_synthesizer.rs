use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::AudioFormat;

use super::ServiceFailure;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        format: AudioFormat,
    ) -> Result<Bytes, SpeechSynthesizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechSynthesizerError {
    #[error("synthesis endpoint unreachable: {0}")]
    Unreachable(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("text too long: {0} characters")]
    TextTooLong(usize),
}

impl ServiceFailure for SpeechSynthesizerError {
    fn is_unreachable(&self) -> bool {
        matches!(self, SpeechSynthesizerError::Unreachable(_))
    }
}

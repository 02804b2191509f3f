use bytes::Bytes;

use crate::application::ports::{SpeechSynthesizer, SpeechSynthesizerError};
use crate::domain::AudioFormat;

/// Returns the request text as the audio payload.
pub struct MockSpeechSynthesizer;

#[async_trait::async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        format: AudioFormat,
    ) -> Result<Bytes, SpeechSynthesizerError> {
        Ok(Bytes::from(format!("[{} {}] {}", voice_id, format, text)))
    }
}

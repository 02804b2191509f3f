use std::sync::Arc;

use crate::application::ports::{SpeechRecognizer, SpeechSynthesizer, StagingStore};
use crate::config::{ProviderSetting, RecognitionSettings, SynthesisSettings};
use crate::infrastructure::provider_config_error::{ProviderConfigError, require_base_url};

use super::mock_speech_recognizer::MockSpeechRecognizer;
use super::mock_speech_synthesizer::MockSpeechSynthesizer;
use super::rest_speech_recognizer::RestSpeechRecognizer;
use super::rest_speech_synthesizer::RestSpeechSynthesizer;

pub const SCAFFOLD_TRANSCRIPT: &str = "Arthur walked from London to Paris in the spring of 1921. \
He wrote to his sister Margaret every week and described the roads, the weather and the people \
he met. The journey was long but Arthur said it was the happiest time of his life. \
Years later his letters were collected and published by the Oxford University Press.";

pub struct SpeechProviderFactory;

impl SpeechProviderFactory {
    /// The mock recognizer writes its transcript through `store`, standing in
    /// for the service writing to the job's output location.
    pub fn create_recognizer(
        settings: &RecognitionSettings,
        store: Arc<dyn StagingStore>,
    ) -> Result<Arc<dyn SpeechRecognizer>, ProviderConfigError> {
        match settings.provider {
            ProviderSetting::Rest => {
                let base_url = require_base_url("recognition", settings.base_url.as_deref())?;
                Ok(Arc::new(RestSpeechRecognizer::new(
                    base_url,
                    settings.api_key.clone(),
                )))
            }
            ProviderSetting::Mock => {
                let transcript = settings
                    .scaffold_transcript
                    .clone()
                    .unwrap_or_else(|| SCAFFOLD_TRANSCRIPT.to_string());
                Ok(Arc::new(MockSpeechRecognizer::new(store, transcript, 1)))
            }
        }
    }

    pub fn create_synthesizer(
        settings: &SynthesisSettings,
    ) -> Result<Arc<dyn SpeechSynthesizer>, ProviderConfigError> {
        match settings.provider {
            ProviderSetting::Rest => {
                let base_url = require_base_url("synthesis", settings.base_url.as_deref())?;
                Ok(Arc::new(RestSpeechSynthesizer::new(
                    base_url,
                    settings.api_key.clone(),
                )))
            }
            ProviderSetting::Mock => Ok(Arc::new(MockSpeechSynthesizer)),
        }
    }
}

mod mock_speech_recognizer;
mod mock_speech_synthesizer;
mod rest_speech_recognizer;
mod rest_speech_synthesizer;
mod speech_provider_factory;

pub use mock_speech_recognizer::MockSpeechRecognizer;
pub use mock_speech_synthesizer::MockSpeechSynthesizer;
pub use rest_speech_recognizer::RestSpeechRecognizer;
pub use rest_speech_synthesizer::RestSpeechSynthesizer;
pub use speech_provider_factory::{SCAFFOLD_TRANSCRIPT, SpeechProviderFactory};

mod annotator;
mod chart_renderer;
mod service_failure;
mod speech_recognizer;
mod speech_synthesizer;
mod staging_store;
mod text_splitter;
mod translator;

pub use annotator::{Annotator, AnnotatorError};
pub use chart_renderer::{ChartRenderError, ChartRenderer};
pub use service_failure::{CallOutcome, ServiceFailure, settle};
pub use speech_recognizer::{SpeechRecognizer, SpeechRecognizerError};
pub use speech_synthesizer::{SpeechSynthesizer, SpeechSynthesizerError};
pub use staging_store::{StagingStore, StagingStoreError};
pub use text_splitter::TextSplitter;
pub use translator::{Translator, TranslatorError};

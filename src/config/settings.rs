use serde::Deserialize;

use crate::domain::{AudioFormat, MediaFormat};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub storage: StorageSettings,
    pub recognition: RecognitionSettings,
    #[serde(default)]
    pub annotation: AnnotationSettings,
    #[serde(default)]
    pub translation: TranslationSettings,
    #[serde(default)]
    pub synthesis: SynthesisSettings,
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub visualization: VisualizationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Which adapter backs an external service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderSetting {
    #[default]
    Rest,
    Mock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Local,
    S3,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub bucket: String,
    #[serde(default = "default_local_path")]
    pub local_path: String,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionSettings {
    #[serde(default)]
    pub provider: ProviderSetting,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub media_key: String,
    #[serde(default = "default_media_format")]
    pub media_format: MediaFormat,
    #[serde(default = "default_recognition_language")]
    pub language_code: String,
    #[serde(default = "default_transcript_key")]
    pub transcript_key: String,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Upper bound on the poll loop. Unbounded when absent.
    pub max_wait_secs: Option<u64>,
    /// Transcript produced by the mock recognizer.
    pub scaffold_transcript: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationSettings {
    #[serde(default)]
    pub provider: ProviderSetting,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    #[serde(default = "default_text_language")]
    pub language_code: String,
    #[serde(default = "default_annotation_chunk_chars")]
    pub max_chunk_chars: usize,
}

impl Default for AnnotationSettings {
    fn default() -> Self {
        Self {
            provider: ProviderSetting::default(),
            base_url: None,
            api_key: None,
            language_code: default_text_language(),
            max_chunk_chars: default_annotation_chunk_chars(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    #[serde(default)]
    pub provider: ProviderSetting,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    #[serde(default = "default_text_language")]
    pub source_language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            provider: ProviderSetting::default(),
            base_url: None,
            api_key: None,
            source_language: default_text_language(),
            target_language: default_target_language(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisSettings {
    #[serde(default)]
    pub provider: ProviderSetting,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    #[serde(default = "default_voice_id")]
    pub voice_id: String,
    #[serde(default = "default_audio_format")]
    pub output_format: AudioFormat,
    #[serde(default = "default_synthesis_chunk_chars")]
    pub max_chunk_chars: usize,
    #[serde(default)]
    pub key_prefix: String,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            provider: ProviderSetting::default(),
            base_url: None,
            api_key: None,
            voice_id: default_voice_id(),
            output_format: default_audio_format(),
            max_chunk_chars: default_synthesis_chunk_chars(),
            key_prefix: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_report_key")]
    pub key: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            key: default_report_key(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisualizationSettings {
    #[serde(default = "default_chart_path")]
    pub output_path: String,
    #[serde(default = "default_chart_width")]
    pub width: u32,
    #[serde(default = "default_chart_height")]
    pub height: u32,
}

impl Default for VisualizationSettings {
    fn default() -> Self {
        Self {
            output_path: default_chart_path(),
            width: default_chart_width(),
            height: default_chart_height(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub json: bool,
    pub filter: Option<String>,
}

fn default_local_path() -> String {
    "./data".to_string()
}

fn default_media_format() -> MediaFormat {
    MediaFormat::Mp3
}

fn default_recognition_language() -> String {
    "en-US".to_string()
}

fn default_transcript_key() -> String {
    "transcribed.txt".to_string()
}

fn default_poll_interval_secs() -> u64 {
    10
}

fn default_text_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "hi".to_string()
}

fn default_annotation_chunk_chars() -> usize {
    5000
}

fn default_voice_id() -> String {
    "Aditi".to_string()
}

fn default_audio_format() -> AudioFormat {
    AudioFormat::Mp3
}

fn default_synthesis_chunk_chars() -> usize {
    1000
}

fn default_report_key() -> String {
    "summarized.txt".to_string()
}

fn default_chart_path() -> String {
    "visualization.png".to_string()
}

fn default_chart_width() -> u32 {
    1400
}

fn default_chart_height() -> u32 {
    1000
}

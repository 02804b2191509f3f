use std::io::Write;

use relingua::config::{
    Environment, ProviderSetting, SettingsError, StorageProviderSetting, load_settings_from,
};
use relingua::domain::{AudioFormat, MediaFormat};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn given_minimal_file_when_loading_then_applies_defaults() {
    let file = write_config(
        r#"
[storage]
provider = "local"
bucket = "media"

[recognition]
base_url = "http://localhost:9000"
media_key = "input.mp3"
"#,
    );

    let settings = load_settings_from(file.path()).unwrap();

    assert_eq!(settings.storage.provider, StorageProviderSetting::Local);
    assert_eq!(settings.storage.local_path, "./data");
    assert_eq!(settings.recognition.provider, ProviderSetting::Rest);
    assert_eq!(settings.recognition.media_format, MediaFormat::Mp3);
    assert_eq!(settings.recognition.transcript_key, "transcribed.txt");
    assert_eq!(settings.recognition.poll_interval_secs, 10);
    assert!(settings.recognition.max_wait_secs.is_none());
    assert_eq!(settings.annotation.language_code, "en");
    assert_eq!(settings.annotation.max_chunk_chars, 5000);
    assert_eq!(settings.translation.target_language, "hi");
    assert_eq!(settings.synthesis.voice_id, "Aditi");
    assert_eq!(settings.synthesis.output_format, AudioFormat::Mp3);
    assert_eq!(settings.synthesis.max_chunk_chars, 1000);
    assert_eq!(settings.report.key, "summarized.txt");
    assert_eq!(settings.visualization.output_path, "visualization.png");
    assert!(!settings.logging.json);
}

#[test]
fn given_full_file_when_loading_then_reads_every_section() {
    let file = write_config(
        r#"
[storage]
provider = "s3"
bucket = "lectures"
s3_region = "eu-north-1"

[recognition]
provider = "mock"
media_key = "week1/talk.wav"
media_format = "wav"
poll_interval_secs = 2
max_wait_secs = 600

[annotation]
provider = "mock"
max_chunk_chars = 900

[translation]
provider = "mock"
source_language = "en"
target_language = "de"

[synthesis]
provider = "mock"
voice_id = "Vicki"
output_format = "ogg_vorbis"
key_prefix = "audio/"

[report]
key = "reports/summary.txt"

[visualization]
output_path = "out/charts.png"
width = 800
height = 600

[logging]
json = true
filter = "warn"
"#,
    );

    let settings = load_settings_from(file.path()).unwrap();

    assert_eq!(settings.storage.provider, StorageProviderSetting::S3);
    assert_eq!(settings.storage.s3_region.as_deref(), Some("eu-north-1"));
    assert_eq!(settings.recognition.provider, ProviderSetting::Mock);
    assert_eq!(settings.recognition.media_format, MediaFormat::Wav);
    assert_eq!(settings.recognition.max_wait_secs, Some(600));
    assert_eq!(settings.annotation.max_chunk_chars, 900);
    assert_eq!(settings.translation.target_language, "de");
    assert_eq!(settings.synthesis.output_format, AudioFormat::OggVorbis);
    assert_eq!(settings.synthesis.key_prefix, "audio/");
    assert_eq!(settings.report.key, "reports/summary.txt");
    assert_eq!(settings.visualization.width, 800);
    assert!(settings.logging.json);
    assert_eq!(settings.logging.filter.as_deref(), Some("warn"));
}

#[test]
fn given_file_without_storage_when_loading_then_fails() {
    let file = write_config(
        r#"
[recognition]
media_key = "input.mp3"
"#,
    );

    let result = load_settings_from(file.path());

    assert!(result.is_err());
}

#[test]
fn given_environment_names_when_parsing_then_accepts_aliases_and_case() {
    assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
    assert_eq!(" Test ".parse::<Environment>().unwrap(), Environment::Test);
    assert_eq!("PRODUCTION".parse::<Environment>().unwrap(), Environment::Prod);
}

#[test]
fn given_unknown_environment_when_parsing_then_names_the_value() {
    let error = "staging".parse::<Environment>().unwrap_err();

    assert!(matches!(&error, SettingsError::UnknownEnvironment(v) if v == "staging"));
    assert!(error.to_string().contains("\"staging\""));
}

#[test]
fn given_environment_when_naming_settings_file_then_uses_lowercase_stem() {
    assert_eq!(Environment::Prod.settings_file(), "relingua.prod");
    assert_eq!(Environment::default(), Environment::Local);
}

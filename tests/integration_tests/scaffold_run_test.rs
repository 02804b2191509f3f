use std::io::Write;

use relingua::application::ports::StagingStore;
use relingua::config::load_settings_from;
use relingua::domain::StoragePath;
use relingua::infrastructure::audio::SCAFFOLD_TRANSCRIPT;
use relingua::infrastructure::storage::LocalStagingStore;
use relingua::presentation::{AssemblyError, PipelineAssembly};

fn scaffold_settings(dir: &std::path::Path) -> String {
    format!(
        r#"
[storage]
provider = "local"
bucket = "media"
local_path = "{root}"

[recognition]
provider = "mock"
media_key = "input.mp3"
poll_interval_secs = 0

[annotation]
provider = "mock"
max_chunk_chars = 120

[translation]
provider = "mock"

[synthesis]
provider = "mock"
max_chunk_chars = 200

[visualization]
output_path = "{root}/visualization.png"
width = 300
height = 200
"#,
        root = dir.display()
    )
}

fn write_config(dir: &std::path::Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("relingua.test.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[tokio::test]
async fn given_all_mock_providers_when_running_then_completes_offline() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &scaffold_settings(dir.path()));
    let settings = load_settings_from(&config).unwrap();

    let assembly = PipelineAssembly::from_settings(&settings).await.unwrap();
    let run = assembly.pipeline.run(&assembly.request).await.unwrap();

    assert_eq!(run.transcript.text(), SCAFFOLD_TRANSCRIPT);
    assert!(run.chunk_count > 1);
    assert!(run.skipped.is_empty());
    assert!(!run.audio.is_empty());
    assert!(run.translation.text().starts_with("[hi] "));

    let outputs = LocalStagingStore::new(dir.path().join("media")).unwrap();
    let report = outputs
        .fetch(&StoragePath::from_raw("summarized.txt"))
        .await
        .unwrap();
    assert!(String::from_utf8(report).unwrap().contains("(Arthur, OTHER)"));
    assert!(dir.path().join("media").join("translated_chunk_0.mp3").exists());
    assert!(dir.path().join("visualization.png").exists());
}

#[tokio::test]
async fn given_rest_provider_without_base_url_when_assembling_then_fails() {
    let dir = tempfile::tempdir().unwrap();
    let contents = scaffold_settings(dir.path()).replace(
        "[translation]\nprovider = \"mock\"",
        "[translation]\nprovider = \"rest\"",
    );
    let config = write_config(dir.path(), &contents);
    let settings = load_settings_from(&config).unwrap();

    let result = PipelineAssembly::from_settings(&settings).await;

    assert!(matches!(result, Err(AssemblyError::Provider(_))));
}

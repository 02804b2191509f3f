use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::application::services::{
    AnnotationAggregator, JobPoller, MediaPipeline, PipelineRequest, SynthesisOptions,
    SynthesisStage, TranslationStage,
};
use crate::config::{ProviderSetting, Settings};
use crate::domain::{MediaUri, StoragePath};
use crate::infrastructure::ProviderConfigError;
use crate::infrastructure::audio::SpeechProviderFactory;
use crate::infrastructure::language::LanguageProviderFactory;
use crate::infrastructure::storage::StagingStoreFactory;
use crate::infrastructure::text_processing::WordWrapSplitter;
use crate::infrastructure::visualization::PngChartRenderer;

/// Placeholder written at the media key when the mock recognizer finds no input.
pub const SCAFFOLD_MEDIA: &[u8] = b"scaffold media placeholder";

/// A pipeline wired from settings, with the request it should run.
pub struct PipelineAssembly {
    pub pipeline: MediaPipeline,
    pub request: PipelineRequest,
}

impl PipelineAssembly {
    pub async fn from_settings(settings: &Settings) -> Result<Self, AssemblyError> {
        let store = StagingStoreFactory::create(&settings.storage)?;

        let recognizer =
            SpeechProviderFactory::create_recognizer(&settings.recognition, Arc::clone(&store))?;
        let synthesizer = SpeechProviderFactory::create_synthesizer(&settings.synthesis)?;
        let annotator = LanguageProviderFactory::create_annotator(&settings.annotation)?;
        let translator = LanguageProviderFactory::create_translator(&settings.translation)?;

        let poller = JobPoller::new(
            recognizer,
            Duration::from_secs(settings.recognition.poll_interval_secs),
        )
        .with_max_wait(settings.recognition.max_wait_secs.map(Duration::from_secs));

        let annotation_splitter =
            Arc::new(WordWrapSplitter::new(settings.annotation.max_chunk_chars));
        let synthesis_splitter = Arc::new(WordWrapSplitter::new(settings.synthesis.max_chunk_chars));

        let aggregator =
            AnnotationAggregator::new(annotator, settings.annotation.language_code.clone());
        let translation = TranslationStage::new(
            translator,
            settings.translation.source_language.clone(),
            settings.translation.target_language.clone(),
        );
        let synthesis = SynthesisStage::new(
            synthesizer,
            Arc::clone(&store),
            synthesis_splitter,
            SynthesisOptions {
                voice_id: settings.synthesis.voice_id.clone(),
                format: settings.synthesis.output_format,
                key_prefix: settings.synthesis.key_prefix.clone(),
            },
        );
        let chart_renderer = Arc::new(PngChartRenderer::new(
            settings.visualization.width,
            settings.visualization.height,
        ));

        let pipeline = MediaPipeline::new(
            poller,
            Arc::clone(&store),
            annotation_splitter,
            aggregator,
            translation,
            synthesis,
            chart_renderer,
            StoragePath::from_raw(settings.report.key.clone()),
            PathBuf::from(&settings.visualization.output_path),
        );

        let request = PipelineRequest {
            media: MediaUri::new(
                settings.storage.bucket.clone(),
                StoragePath::from_raw(settings.recognition.media_key.clone()),
            ),
            transcript_path: StoragePath::from_raw(settings.recognition.transcript_key.clone()),
            media_format: settings.recognition.media_format,
            language_code: settings.recognition.language_code.clone(),
        };

        if settings.recognition.provider == ProviderSetting::Mock {
            seed_scaffold_media(store.as_ref(), request.media.path()).await?;
        }

        Ok(Self { pipeline, request })
    }
}

async fn seed_scaffold_media(
    store: &dyn StagingStore,
    path: &StoragePath,
) -> Result<(), StagingStoreError> {
    match store.head(path).await {
        Ok(_) => Ok(()),
        Err(StagingStoreError::NotFound(_)) => {
            tracing::info!(media = %path, "Scaffold mode: seeding placeholder media");
            store
                .put(path, Bytes::from_static(SCAFFOLD_MEDIA), None)
                .await
                .map(|_| ())
        }
        Err(e) => Err(e),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    #[error("staging store: {0}")]
    Store(#[from] StagingStoreError),
    #[error("provider: {0}")]
    Provider(#[from] ProviderConfigError),
}

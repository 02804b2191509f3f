use std::sync::Arc;

use crate::application::ports::{
    CallOutcome, SpeechSynthesizer, SpeechSynthesizerError, StagingStore, StagingStoreError,
    TextSplitter, settle,
};
use crate::domain::{
    AudioFormat, SkippedCall, Stage, StoragePath, SynthesizedAudio, SynthesizedAudioSet,
};

/// Where and how synthesized audio is produced.
#[derive(Debug, Clone)]
pub struct SynthesisOptions {
    pub voice_id: String,
    pub format: AudioFormat,
    pub key_prefix: String,
}

pub struct SynthesisStage {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    store: Arc<dyn StagingStore>,
    splitter: Arc<dyn TextSplitter>,
    options: SynthesisOptions,
}

impl SynthesisStage {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        store: Arc<dyn StagingStore>,
        splitter: Arc<dyn TextSplitter>,
        options: SynthesisOptions,
    ) -> Self {
        Self {
            synthesizer,
            store,
            splitter,
            options,
        }
    }

    /// Re-chunks `text` under this stage's own bound and persists one audio
    /// object per chunk, keyed by the chunk's index within this stage.
    pub async fn synthesize(
        &self,
        text: &str,
        skipped: &mut Vec<SkippedCall>,
    ) -> Result<SynthesizedAudioSet, SynthesisError> {
        let chunks = self.splitter.split(text);
        let mut audio = SynthesizedAudioSet::new(chunks.len());

        tracing::info!(
            chunks = chunks.len(),
            max_len = self.splitter.max_len(),
            voice = %self.options.voice_id,
            "Starting speech synthesis"
        );

        for chunk in &chunks {
            let result = self
                .synthesizer
                .synthesize(&chunk.text, &self.options.voice_id, self.options.format)
                .await;

            let payload = match settle(result)? {
                CallOutcome::Success(payload) => payload,
                CallOutcome::Skipped { reason } => {
                    self.skip(skipped, "synthesize", chunk.index, reason);
                    continue;
                }
            };

            let path = StoragePath::synthesized_chunk(
                &self.options.key_prefix,
                chunk.index,
                self.options.format.extension(),
            );

            match settle(
                self.store
                    .put(&path, payload, Some(self.options.format.mime()))
                    .await,
            )? {
                CallOutcome::Success(size_bytes) => {
                    tracing::debug!(path = %path, size_bytes, "Stored synthesized audio");
                    audio.push(SynthesizedAudio {
                        index: chunk.index,
                        path,
                        size_bytes,
                    });
                }
                CallOutcome::Skipped { reason } => {
                    self.skip(skipped, "store-audio", chunk.index, reason);
                }
            }
        }

        tracing::info!(
            stored = audio.len(),
            gaps = ?audio.gaps(),
            "Speech synthesis completed"
        );
        Ok(audio)
    }

    fn skip(
        &self,
        skipped: &mut Vec<SkippedCall>,
        operation: &str,
        chunk_index: usize,
        reason: String,
    ) {
        tracing::warn!(
            operation,
            chunk_index,
            reason = %reason,
            "Synthesis call failed, skipping"
        );
        skipped.push(SkippedCall {
            stage: Stage::Synthesis,
            operation: operation.to_string(),
            chunk_index,
            reason,
        });
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("speech synthesizer: {0}")]
    Synthesizer(#[from] SpeechSynthesizerError),
    #[error("staging store: {0}")]
    Store(#[from] StagingStoreError),
}

use std::sync::Arc;

use crate::application::ports::{CallOutcome, Translator, TranslatorError, settle};
use crate::domain::{Chunk, SkippedCall, Stage, TranslatedDocument};

pub struct TranslationStage {
    translator: Arc<dyn Translator>,
    source_language: String,
    target_language: String,
}

impl TranslationStage {
    pub fn new(
        translator: Arc<dyn Translator>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            translator,
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }

    /// Translates each chunk in order. A skipped chunk contributes nothing,
    /// so the document is shorter than a complete translation would be.
    pub async fn translate(
        &self,
        chunks: &[Chunk],
        skipped: &mut Vec<SkippedCall>,
    ) -> Result<TranslatedDocument, TranslatorError> {
        let mut document = TranslatedDocument::new(&self.source_language, &self.target_language);

        for chunk in chunks {
            let result = self
                .translator
                .translate(&chunk.text, &self.source_language, &self.target_language)
                .await;

            match settle(result)? {
                CallOutcome::Success(text) => document.push_segment(chunk.index, text),
                CallOutcome::Skipped { reason } => {
                    tracing::warn!(
                        chunk_index = chunk.index,
                        reason = %reason,
                        "Translation call failed, skipping"
                    );
                    skipped.push(SkippedCall {
                        stage: Stage::Translation,
                        operation: "translate".to_string(),
                        chunk_index: chunk.index,
                        reason,
                    });
                }
            }
        }

        tracing::info!(
            source = %self.source_language,
            target = %self.target_language,
            chunks = chunks.len(),
            translated = document.segments().len(),
            "Translation completed"
        );
        Ok(document)
    }
}

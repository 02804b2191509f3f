use std::sync::Arc;

use tracing::Instrument;

use crate::application::ports::{Annotator, AnnotatorError, CallOutcome, settle};
use crate::domain::{AnnotationOperation, AnnotationSet, Chunk, SkippedCall, Stage};

/// Runs the six annotation calls for every chunk and merges the results.
pub struct AnnotationAggregator {
    annotator: Arc<dyn Annotator>,
    language_code: String,
}

impl AnnotationAggregator {
    pub fn new(annotator: Arc<dyn Annotator>, language_code: impl Into<String>) -> Self {
        Self {
            annotator,
            language_code: language_code.into(),
        }
    }

    /// Annotates `chunks` in order, appending to `annotations`.
    ///
    /// Returns early with the error on the first unreachable-endpoint
    /// failure. Any other failed call is recorded in `skipped` and its
    /// contribution is left out.
    pub async fn annotate(
        &self,
        chunks: &[Chunk],
        annotations: &mut AnnotationSet,
        skipped: &mut Vec<SkippedCall>,
    ) -> Result<(), AnnotatorError> {
        for chunk in chunks {
            let span = tracing::debug_span!(
                "annotate_chunk",
                chunk_index = chunk.index,
                chars = chunk.char_len()
            );
            self.annotate_chunk(chunk, annotations, skipped)
                .instrument(span)
                .await?;
        }

        let skew = annotations.skew();
        if !skew.is_empty() {
            tracing::warn!(skew = ?skew, "Annotation lists are positionally skewed");
        }

        tracing::info!(
            chunks = chunks.len(),
            entities = annotations.entities.len(),
            key_phrases = annotations.key_phrases.len(),
            languages = annotations.languages.len(),
            sentiments = annotations.sentiments.len(),
            pii_entities = annotations.pii_entities.len(),
            syntax_tokens = annotations.syntax_tokens.len(),
            "Annotation completed"
        );
        Ok(())
    }

    async fn annotate_chunk(
        &self,
        chunk: &Chunk,
        annotations: &mut AnnotationSet,
        skipped: &mut Vec<SkippedCall>,
    ) -> Result<(), AnnotatorError> {
        let text = chunk.text.as_str();
        let language = self.language_code.as_str();
        let index = chunk.index;

        match settle(self.annotator.detect_key_phrases(text, language).await)? {
            CallOutcome::Success(phrases) => annotations.extend_key_phrases(index, phrases),
            CallOutcome::Skipped { reason } => {
                skip(annotations, skipped, AnnotationOperation::KeyPhrases, index, reason)
            }
        }

        match settle(self.annotator.detect_dominant_language(text).await)? {
            CallOutcome::Success(languages) => annotations.extend_languages(index, languages),
            CallOutcome::Skipped { reason } => skip(
                annotations,
                skipped,
                AnnotationOperation::DominantLanguage,
                index,
                reason,
            ),
        }

        match settle(self.annotator.detect_sentiment(text, language).await)? {
            CallOutcome::Success(sentiment) => annotations.push_sentiment(index, sentiment),
            CallOutcome::Skipped { reason } => {
                skip(annotations, skipped, AnnotationOperation::Sentiment, index, reason)
            }
        }

        match settle(self.annotator.detect_pii_entities(text, language).await)? {
            CallOutcome::Success(entities) => annotations.extend_pii_entities(index, entities),
            CallOutcome::Skipped { reason } => {
                skip(annotations, skipped, AnnotationOperation::PiiEntities, index, reason)
            }
        }

        match settle(self.annotator.detect_entities(text, language).await)? {
            CallOutcome::Success(entities) => annotations.extend_entities(index, entities),
            CallOutcome::Skipped { reason } => {
                skip(annotations, skipped, AnnotationOperation::Entities, index, reason)
            }
        }

        match settle(self.annotator.detect_syntax(text, language).await)? {
            CallOutcome::Success(tokens) => annotations.extend_syntax_tokens(index, tokens),
            CallOutcome::Skipped { reason } => {
                skip(annotations, skipped, AnnotationOperation::Syntax, index, reason)
            }
        }

        Ok(())
    }
}

fn skip(
    annotations: &mut AnnotationSet,
    skipped: &mut Vec<SkippedCall>,
    operation: AnnotationOperation,
    chunk_index: usize,
    reason: String,
) {
    tracing::warn!(
        operation = %operation,
        chunk_index,
        reason = %reason,
        "Annotation call failed, skipping"
    );
    annotations.record_gap(operation, chunk_index);
    skipped.push(SkippedCall {
        stage: Stage::Annotation,
        operation: operation.as_str().to_string(),
        chunk_index,
        reason,
    });
}

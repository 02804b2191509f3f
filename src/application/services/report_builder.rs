use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::{
    AnnotationSet, SkippedCall, StoragePath, SynthesizedAudioSet, TranslatedDocument,
};

const REPORT_CONTENT_TYPE: &str = "text/plain";

/// Progressively built plain-text summary of a run.
///
/// Sections are appended in a fixed order and the whole content is
/// rewritten to the same object on every `persist`.
pub struct ReportBuilder {
    store: Arc<dyn StagingStore>,
    path: StoragePath,
    content: String,
    writes: usize,
}

impl ReportBuilder {
    pub fn new(store: Arc<dyn StagingStore>, path: StoragePath) -> Self {
        Self {
            store,
            path,
            content: String::new(),
            writes: 0,
        }
    }

    pub fn append_annotations(&mut self, annotations: &AnnotationSet) {
        let out = &mut self.content;

        out.push_str("\nEntities:\n");
        for entity in &annotations.entities {
            out.push_str(&format!(
                "({}, {})\n",
                entity.value.text, entity.value.label
            ));
        }
        out.push_str("\n\n");

        out.push_str(&format!(
            "\nKey Phrases: {:?}\n",
            annotations.key_phrase_texts()
        ));
        out.push_str(&format!(
            "Languages: {:?}\n",
            annotations.language_codes()
        ));
        let sentiments: Vec<&str> = annotations
            .sentiment_labels()
            .iter()
            .map(|s| s.as_str())
            .collect();
        out.push_str(&format!("Targeted Sentiments: {:?}\n", sentiments));
        out.push_str(&format!("PII Entities: {:?}\n", annotations.pii_texts()));

        out.push_str("Keyphrase Extraction:\n");
        for phrase in &annotations.key_phrases {
            out.push_str(&format!(
                "  [chunk {}] {} (score {:.3}, offsets {}..{})\n",
                phrase.chunk_index,
                phrase.value.text,
                phrase.value.score,
                phrase.value.begin_offset,
                phrase.value.end_offset
            ));
        }

        let tokens: Vec<String> = annotations
            .syntax_tokens
            .iter()
            .map(|t| format!("{}/{}", t.value.text, t.value.part_of_speech))
            .collect();
        out.push_str(&format!("Syntax Analysis: {:?}\n", tokens));

        let skew = annotations.skew();
        if !skew.is_empty() {
            out.push_str("Annotation Skew:\n");
            for (operation, missing) in skew {
                out.push_str(&format!("  {} missing chunks {:?}\n", operation, missing));
            }
        }
    }

    pub fn append_translation(&mut self, document: &TranslatedDocument, chunk_count: usize) {
        let out = &mut self.content;
        out.push_str(&format!(
            "\nTranslation ({} -> {}):\n",
            document.source_language, document.target_language
        ));
        out.push_str(&format!(
            "  chunks translated: {}/{}\n",
            document.segments().len(),
            chunk_count
        ));
        out.push_str(&format!(
            "  characters: {}\n",
            document.text().chars().count()
        ));
    }

    pub fn append_synthesis(&mut self, audio: &SynthesizedAudioSet) {
        let out = &mut self.content;
        out.push_str(&format!(
            "Synthesis:\n  audio objects: {}/{}\n",
            audio.len(),
            audio.chunk_count()
        ));
        for item in audio.items() {
            out.push_str(&format!("  - {} ({} bytes)\n", item.path, item.size_bytes));
        }
        let gaps = audio.gaps();
        if !gaps.is_empty() {
            out.push_str(&format!("  missing indices: {:?}\n", gaps));
        }
    }

    pub fn append_skipped(&mut self, skipped: &[SkippedCall]) {
        let out = &mut self.content;
        out.push_str("Skipped Calls:\n");
        if skipped.is_empty() {
            out.push_str("  none\n");
        }
        for call in skipped {
            out.push_str(&format!("  - {}\n", call));
        }
    }

    pub async fn persist(&mut self) -> Result<u64, StagingStoreError> {
        let size = self
            .store
            .put(
                &self.path,
                Bytes::from(self.content.clone()),
                Some(REPORT_CONTENT_TYPE),
            )
            .await?;
        self.writes += 1;
        tracing::info!(path = %self.path, size, writes = self.writes, "Report persisted");
        Ok(size)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

use super::Tagged;

/// Translated text rebuilt from per-chunk translations in chunk order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslatedDocument {
    pub source_language: String,
    pub target_language: String,
    segments: Vec<Tagged<String>>,
}

impl TranslatedDocument {
    pub fn new(source_language: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
            segments: Vec::new(),
        }
    }

    pub fn push_segment(&mut self, chunk_index: usize, text: String) {
        self.segments.push(Tagged::new(chunk_index, text));
    }

    pub fn segments(&self) -> &[Tagged<String>] {
        &self.segments
    }

    /// Segments concatenated directly, without reinserting separators.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.value.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.value.trim().is_empty())
    }
}

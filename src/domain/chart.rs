use std::collections::BTreeMap;

use super::AnnotationSet;

const MAX_KEY_PHRASE_WORDS: usize = 20;

/// A labelled bar series, ordered by descending count then label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarSeries {
    pub title: String,
    pub bars: Vec<(String, usize)>,
}

impl BarSeries {
    fn from_counts(title: &str, counts: BTreeMap<String, usize>, limit: Option<usize>) -> Self {
        let mut bars: Vec<(String, usize)> = counts.into_iter().collect();
        bars.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        if let Some(limit) = limit {
            bars.truncate(limit);
        }
        Self {
            title: title.to_string(),
            bars,
        }
    }

    pub fn max_count(&self) -> usize {
        self.bars.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }
}

/// The four summary charts drawn from a run's annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSet {
    pub entity_distribution: BarSeries,
    pub sentiment_counts: BarSeries,
    pub key_phrase_words: BarSeries,
    pub language_counts: BarSeries,
}

impl ChartSet {
    /// Builds the charts. Every aggregate they draw from must be non-empty.
    pub fn from_annotations(annotations: &AnnotationSet) -> Result<Self, ChartError> {
        if annotations.entities.is_empty() {
            return Err(ChartError::EmptyAggregate("entities"));
        }
        if annotations.sentiments.is_empty() {
            return Err(ChartError::EmptyAggregate("sentiments"));
        }
        if annotations.key_phrases.is_empty() {
            return Err(ChartError::EmptyAggregate("key phrases"));
        }
        if annotations.languages.is_empty() {
            return Err(ChartError::EmptyAggregate("languages"));
        }

        let mut entities = BTreeMap::new();
        for entity in &annotations.entities {
            *entities.entry(entity.value.label.clone()).or_insert(0) += 1;
        }

        let mut sentiments = BTreeMap::new();
        for sentiment in annotations.sentiment_labels() {
            *sentiments.entry(sentiment.as_str().to_string()).or_insert(0) += 1;
        }

        let mut words = BTreeMap::new();
        for phrase in annotations.key_phrase_texts() {
            for word in phrase.split_whitespace() {
                let word = word
                    .trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase();
                if !word.is_empty() {
                    *words.entry(word).or_insert(0) += 1;
                }
            }
        }

        let mut languages = BTreeMap::new();
        for code in annotations.language_codes() {
            *languages.entry(code.to_string()).or_insert(0) += 1;
        }

        Ok(Self {
            entity_distribution: BarSeries::from_counts("Entity Distribution", entities, None),
            sentiment_counts: BarSeries::from_counts("Sentiment Analysis", sentiments, None),
            key_phrase_words: BarSeries::from_counts(
                "Key Phrase Words",
                words,
                Some(MAX_KEY_PHRASE_WORDS),
            ),
            language_counts: BarSeries::from_counts("Language Distribution", languages, None),
        })
    }

    pub fn panels(&self) -> [&BarSeries; 4] {
        [
            &self.entity_distribution,
            &self.sentiment_counts,
            &self.key_phrase_words,
            &self.language_counts,
        ]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("cannot chart an empty aggregate: {0}")]
    EmptyAggregate(&'static str),
}

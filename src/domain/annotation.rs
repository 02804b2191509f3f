use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// A value contributed by one chunk, tagged with that chunk's index.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged<T> {
    pub chunk_index: usize,
    pub value: T,
}

impl<T> Tagged<T> {
    pub fn new(chunk_index: usize, value: T) -> Self {
        Self { chunk_index, value }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyPhrase {
    pub text: String,
    pub score: f32,
    pub begin_offset: usize,
    pub end_offset: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLanguage {
    pub code: String,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiiEntity {
    pub text: String,
    pub entity_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxToken {
    pub text: String,
    pub part_of_speech: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
            Sentiment::Neutral => "NEUTRAL",
            Sentiment::Mixed => "MIXED",
        }
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POSITIVE" => Ok(Sentiment::Positive),
            "NEGATIVE" => Ok(Sentiment::Negative),
            "NEUTRAL" => Ok(Sentiment::Neutral),
            "MIXED" => Ok(Sentiment::Mixed),
            _ => Err(format!("Invalid sentiment: {}", s)),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six annotation calls issued for every chunk, in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnnotationOperation {
    KeyPhrases,
    DominantLanguage,
    Sentiment,
    PiiEntities,
    Entities,
    Syntax,
}

impl AnnotationOperation {
    pub const ALL: [AnnotationOperation; 6] = [
        AnnotationOperation::KeyPhrases,
        AnnotationOperation::DominantLanguage,
        AnnotationOperation::Sentiment,
        AnnotationOperation::PiiEntities,
        AnnotationOperation::Entities,
        AnnotationOperation::Syntax,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationOperation::KeyPhrases => "detect-key-phrases",
            AnnotationOperation::DominantLanguage => "detect-dominant-language",
            AnnotationOperation::Sentiment => "detect-sentiment",
            AnnotationOperation::PiiEntities => "detect-pii-entities",
            AnnotationOperation::Entities => "detect-entities",
            AnnotationOperation::Syntax => "detect-syntax",
        }
    }
}

impl fmt::Display for AnnotationOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Annotations accumulated across all chunks of one pipeline run.
///
/// Every collection is append-only and ordered by chunk index, then by the
/// order the annotator returned results within a chunk. Skipped calls are
/// remembered so positional skew between collections can be reported.
#[derive(Debug, Clone, Default)]
pub struct AnnotationSet {
    pub entities: Vec<Tagged<Entity>>,
    pub key_phrases: Vec<Tagged<KeyPhrase>>,
    pub languages: Vec<Tagged<DetectedLanguage>>,
    pub sentiments: Vec<Tagged<Sentiment>>,
    pub pii_entities: Vec<Tagged<PiiEntity>>,
    pub syntax_tokens: Vec<Tagged<SyntaxToken>>,
    gaps: BTreeMap<AnnotationOperation, BTreeSet<usize>>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend_entities(&mut self, chunk_index: usize, items: Vec<Entity>) {
        append_tagged(&mut self.entities, chunk_index, items);
    }

    pub fn extend_key_phrases(&mut self, chunk_index: usize, items: Vec<KeyPhrase>) {
        append_tagged(&mut self.key_phrases, chunk_index, items);
    }

    pub fn extend_languages(&mut self, chunk_index: usize, items: Vec<DetectedLanguage>) {
        append_tagged(&mut self.languages, chunk_index, items);
    }

    pub fn push_sentiment(&mut self, chunk_index: usize, sentiment: Sentiment) {
        self.sentiments.push(Tagged::new(chunk_index, sentiment));
    }

    pub fn extend_pii_entities(&mut self, chunk_index: usize, items: Vec<PiiEntity>) {
        append_tagged(&mut self.pii_entities, chunk_index, items);
    }

    pub fn extend_syntax_tokens(&mut self, chunk_index: usize, items: Vec<SyntaxToken>) {
        append_tagged(&mut self.syntax_tokens, chunk_index, items);
    }

    /// Marks that `operation` contributed nothing for `chunk_index` because its call was skipped.
    pub fn record_gap(&mut self, operation: AnnotationOperation, chunk_index: usize) {
        self.gaps.entry(operation).or_default().insert(chunk_index);
    }

    pub fn gaps(&self, operation: AnnotationOperation) -> Vec<usize> {
        self.gaps
            .get(&operation)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Operations whose skipped chunks differ from at least one other operation.
    ///
    /// Empty when every operation succeeded, or when all of them failed on
    /// exactly the same chunks.
    pub fn skew(&self) -> Vec<(AnnotationOperation, Vec<usize>)> {
        let per_operation: Vec<(AnnotationOperation, Vec<usize>)> = AnnotationOperation::ALL
            .iter()
            .map(|op| (*op, self.gaps(*op)))
            .collect();

        let all_equal = per_operation.windows(2).all(|pair| pair[0].1 == pair[1].1);
        if all_equal {
            return Vec::new();
        }

        per_operation
            .into_iter()
            .filter(|(_, missing)| !missing.is_empty())
            .collect()
    }

    pub fn is_skewed(&self) -> bool {
        !self.skew().is_empty()
    }

    pub fn key_phrase_texts(&self) -> Vec<&str> {
        self.key_phrases
            .iter()
            .map(|t| t.value.text.as_str())
            .collect()
    }

    pub fn language_codes(&self) -> Vec<&str> {
        self.languages.iter().map(|t| t.value.code.as_str()).collect()
    }

    pub fn sentiment_labels(&self) -> Vec<Sentiment> {
        self.sentiments.iter().map(|t| t.value).collect()
    }

    pub fn pii_texts(&self) -> Vec<&str> {
        self.pii_entities
            .iter()
            .map(|t| t.value.text.as_str())
            .collect()
    }
}

fn append_tagged<T>(target: &mut Vec<Tagged<T>>, chunk_index: usize, items: Vec<T>) {
    target.extend(items.into_iter().map(|v| Tagged::new(chunk_index, v)));
}

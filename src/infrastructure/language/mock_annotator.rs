use crate::application::ports::{Annotator, AnnotatorError};
use crate::domain::{DetectedLanguage, Entity, KeyPhrase, PiiEntity, Sentiment, SyntaxToken};

const MIN_KEY_PHRASE_CHARS: usize = 7;

/// Offline annotator for scaffold mode.
///
/// Capitalized words become entities, long words become key phrases, every
/// chunk is English with neutral sentiment and no PII.
pub struct MockAnnotator;

fn words(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_whitespace().filter_map(move |raw| {
        let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            return None;
        }
        let offset = word.as_ptr() as usize - text.as_ptr() as usize;
        Some((offset, word))
    })
}

#[async_trait::async_trait]
impl Annotator for MockAnnotator {
    async fn detect_key_phrases(
        &self,
        text: &str,
        _language_code: &str,
    ) -> Result<Vec<KeyPhrase>, AnnotatorError> {
        Ok(words(text)
            .filter(|(_, w)| w.chars().count() >= MIN_KEY_PHRASE_CHARS)
            .map(|(offset, w)| KeyPhrase {
                text: w.to_string(),
                score: 0.9,
                begin_offset: offset,
                end_offset: offset + w.len(),
            })
            .collect())
    }

    async fn detect_dominant_language(
        &self,
        _text: &str,
    ) -> Result<Vec<DetectedLanguage>, AnnotatorError> {
        Ok(vec![DetectedLanguage {
            code: "en".to_string(),
            score: 1.0,
        }])
    }

    async fn detect_sentiment(
        &self,
        _text: &str,
        _language_code: &str,
    ) -> Result<Sentiment, AnnotatorError> {
        Ok(Sentiment::Neutral)
    }

    async fn detect_pii_entities(
        &self,
        _text: &str,
        _language_code: &str,
    ) -> Result<Vec<PiiEntity>, AnnotatorError> {
        Ok(vec![])
    }

    async fn detect_entities(
        &self,
        text: &str,
        _language_code: &str,
    ) -> Result<Vec<Entity>, AnnotatorError> {
        Ok(words(text)
            .filter(|(_, w)| w.chars().next().is_some_and(char::is_uppercase))
            .map(|(_, w)| Entity {
                text: w.to_string(),
                label: "OTHER".to_string(),
            })
            .collect())
    }

    async fn detect_syntax(
        &self,
        text: &str,
        _language_code: &str,
    ) -> Result<Vec<SyntaxToken>, AnnotatorError> {
        Ok(words(text)
            .map(|(_, w)| SyntaxToken {
                text: w.to_string(),
                part_of_speech: "X".to_string(),
            })
            .collect())
    }
}

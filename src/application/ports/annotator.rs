use async_trait::async_trait;

use crate::domain::{DetectedLanguage, Entity, KeyPhrase, PiiEntity, Sentiment, SyntaxToken};

use super::ServiceFailure;

/// Natural-language annotation service. Each call covers one text chunk.
#[async_trait]
pub trait Annotator: Send + Sync {
    async fn detect_key_phrases(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<KeyPhrase>, AnnotatorError>;

    async fn detect_dominant_language(
        &self,
        text: &str,
    ) -> Result<Vec<DetectedLanguage>, AnnotatorError>;

    async fn detect_sentiment(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Sentiment, AnnotatorError>;

    async fn detect_pii_entities(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<PiiEntity>, AnnotatorError>;

    async fn detect_entities(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<Entity>, AnnotatorError>;

    async fn detect_syntax(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<SyntaxToken>, AnnotatorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnnotatorError {
    #[error("annotation endpoint unreachable: {0}")]
    Unreachable(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ServiceFailure for AnnotatorError {
    fn is_unreachable(&self) -> bool {
        matches!(self, AnnotatorError::Unreachable(_))
    }
}

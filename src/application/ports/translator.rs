use async_trait::async_trait;

use super::ServiceFailure;

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslatorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslatorError {
    #[error("translation endpoint unreachable: {0}")]
    Unreachable(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("unsupported language pair: {0}")]
    UnsupportedLanguagePair(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ServiceFailure for TranslatorError {
    fn is_unreachable(&self) -> bool {
        matches!(self, TranslatorError::Unreachable(_))
    }
}

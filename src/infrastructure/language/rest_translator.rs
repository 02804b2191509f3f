use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{Translator, TranslatorError};
use crate::infrastructure::http::{self, HttpFailure};
use crate::infrastructure::observability::preview_text;

pub struct RestTranslator {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestTranslator {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
            api_key,
        }
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    source_language_code: &'a str,
    target_language_code: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    translated_text: String,
}

impl From<HttpFailure> for TranslatorError {
    fn from(failure: HttpFailure) -> Self {
        match failure {
            HttpFailure::Unreachable(m) => TranslatorError::Unreachable(m),
            HttpFailure::RateLimited => TranslatorError::RateLimited,
            HttpFailure::Decode(m) => TranslatorError::InvalidResponse(m),
            HttpFailure::Status(StatusCode::UNPROCESSABLE_ENTITY, body) => {
                TranslatorError::UnsupportedLanguagePair(body)
            }
            other => TranslatorError::ApiRequestFailed(other.message()),
        }
    }
}

#[async_trait]
impl Translator for RestTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslatorError> {
        let url = http::endpoint(&self.base_url, "translate");
        let body = TranslateRequest {
            text,
            source_language_code: source_language,
            target_language_code: target_language,
        };

        tracing::debug!(
            source = source_language,
            target = target_language,
            text = %preview_text(text),
            "Sending chunk to translator"
        );

        let response = http::post_json(&self.client, &url, self.api_key.as_deref(), &body).await?;
        let result: TranslateResponse = http::decode(response).await?;
        Ok(result.translated_text)
    }
}

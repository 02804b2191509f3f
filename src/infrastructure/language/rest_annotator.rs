use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Annotator, AnnotatorError};
use crate::domain::{
    AnnotationOperation, DetectedLanguage, Entity, KeyPhrase, PiiEntity, Sentiment, SyntaxToken,
};
use crate::infrastructure::http::{self, HttpFailure};
use crate::infrastructure::observability::preview_text;

/// Annotation service reached over JSON, one endpoint per operation.
pub struct RestAnnotator {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestAnnotator {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
            api_key,
        }
    }

    async fn call<R: DeserializeOwned>(
        &self,
        operation: AnnotationOperation,
        text: &str,
        language_code: Option<&str>,
    ) -> Result<R, AnnotatorError> {
        let url = http::endpoint(&self.base_url, operation.as_str());
        let body = AnnotateRequest {
            text,
            language_code,
        };

        tracing::debug!(operation = %operation, text = %preview_text(text), "Calling annotator");

        let response = http::post_json(&self.client, &url, self.api_key.as_deref(), &body).await?;
        Ok(http::decode(response).await?)
    }
}

#[derive(Serialize)]
struct AnnotateRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_code: Option<&'a str>,
}

#[derive(Deserialize)]
struct KeyPhrasesResponse {
    key_phrases: Vec<KeyPhraseDto>,
}

#[derive(Deserialize)]
struct KeyPhraseDto {
    text: String,
    #[serde(default)]
    score: f32,
    #[serde(default)]
    begin_offset: usize,
    #[serde(default)]
    end_offset: usize,
}

#[derive(Deserialize)]
struct LanguagesResponse {
    languages: Vec<LanguageDto>,
}

#[derive(Deserialize)]
struct LanguageDto {
    language_code: String,
    #[serde(default)]
    score: f32,
}

#[derive(Deserialize)]
struct SentimentResponse {
    sentiment: String,
}

#[derive(Deserialize)]
struct EntitiesResponse {
    entities: Vec<EntityDto>,
}

#[derive(Deserialize)]
struct EntityDto {
    #[serde(default)]
    text: String,
    #[serde(rename = "type")]
    entity_type: String,
}

#[derive(Deserialize)]
struct SyntaxResponse {
    syntax_tokens: Vec<SyntaxTokenDto>,
}

#[derive(Deserialize)]
struct SyntaxTokenDto {
    text: String,
    part_of_speech: String,
}

impl From<HttpFailure> for AnnotatorError {
    fn from(failure: HttpFailure) -> Self {
        match failure {
            HttpFailure::Unreachable(m) => AnnotatorError::Unreachable(m),
            HttpFailure::RateLimited => AnnotatorError::RateLimited,
            HttpFailure::Decode(m) => AnnotatorError::InvalidResponse(m),
            other => AnnotatorError::ApiRequestFailed(other.message()),
        }
    }
}

#[async_trait]
impl Annotator for RestAnnotator {
    async fn detect_key_phrases(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<KeyPhrase>, AnnotatorError> {
        let body: KeyPhrasesResponse = self
            .call(AnnotationOperation::KeyPhrases, text, Some(language_code))
            .await?;
        Ok(body
            .key_phrases
            .into_iter()
            .map(|p| KeyPhrase {
                text: p.text,
                score: p.score,
                begin_offset: p.begin_offset,
                end_offset: p.end_offset,
            })
            .collect())
    }

    async fn detect_dominant_language(
        &self,
        text: &str,
    ) -> Result<Vec<DetectedLanguage>, AnnotatorError> {
        let body: LanguagesResponse = self
            .call(AnnotationOperation::DominantLanguage, text, None)
            .await?;
        Ok(body
            .languages
            .into_iter()
            .map(|l| DetectedLanguage {
                code: l.language_code,
                score: l.score,
            })
            .collect())
    }

    async fn detect_sentiment(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Sentiment, AnnotatorError> {
        let body: SentimentResponse = self
            .call(AnnotationOperation::Sentiment, text, Some(language_code))
            .await?;
        body.sentiment
            .parse()
            .map_err(AnnotatorError::InvalidResponse)
    }

    async fn detect_pii_entities(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<PiiEntity>, AnnotatorError> {
        let body: EntitiesResponse = self
            .call(AnnotationOperation::PiiEntities, text, Some(language_code))
            .await?;
        Ok(body
            .entities
            .into_iter()
            .map(|e| PiiEntity {
                text: e.text,
                entity_type: e.entity_type,
            })
            .collect())
    }

    async fn detect_entities(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<Entity>, AnnotatorError> {
        let body: EntitiesResponse = self
            .call(AnnotationOperation::Entities, text, Some(language_code))
            .await?;
        Ok(body
            .entities
            .into_iter()
            .map(|e| Entity {
                text: e.text,
                label: e.entity_type,
            })
            .collect())
    }

    async fn detect_syntax(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<SyntaxToken>, AnnotatorError> {
        let body: SyntaxResponse = self
            .call(AnnotationOperation::Syntax, text, Some(language_code))
            .await?;
        Ok(body
            .syntax_tokens
            .into_iter()
            .map(|t| SyntaxToken {
                text: t.text,
                part_of_speech: t.part_of_speech,
            })
            .collect())
    }
}

use crate::application::ports::{Translator, TranslatorError};

/// Tags the text with the target language instead of translating it.
pub struct MockTranslator;

#[async_trait::async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslatorError> {
        Ok(format!("[{}] {} ", target_language, text))
    }
}

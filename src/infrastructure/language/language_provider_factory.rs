use std::sync::Arc;

use crate::application::ports::{Annotator, Translator};
use crate::config::{AnnotationSettings, ProviderSetting, TranslationSettings};
use crate::infrastructure::provider_config_error::{ProviderConfigError, require_base_url};

use super::mock_annotator::MockAnnotator;
use super::mock_translator::MockTranslator;
use super::rest_annotator::RestAnnotator;
use super::rest_translator::RestTranslator;

pub struct LanguageProviderFactory;

impl LanguageProviderFactory {
    pub fn create_annotator(
        settings: &AnnotationSettings,
    ) -> Result<Arc<dyn Annotator>, ProviderConfigError> {
        match settings.provider {
            ProviderSetting::Rest => {
                let base_url = require_base_url("annotation", settings.base_url.as_deref())?;
                Ok(Arc::new(RestAnnotator::new(
                    base_url,
                    settings.api_key.clone(),
                )))
            }
            ProviderSetting::Mock => Ok(Arc::new(MockAnnotator)),
        }
    }

    pub fn create_translator(
        settings: &TranslationSettings,
    ) -> Result<Arc<dyn Translator>, ProviderConfigError> {
        match settings.provider {
            ProviderSetting::Rest => {
                let base_url = require_base_url("translation", settings.base_url.as_deref())?;
                Ok(Arc::new(RestTranslator::new(
                    base_url,
                    settings.api_key.clone(),
                )))
            }
            ProviderSetting::Mock => Ok(Arc::new(MockTranslator)),
        }
    }
}

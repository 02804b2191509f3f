mod language_provider_factory;
mod mock_annotator;
mod mock_translator;
mod rest_annotator;
mod rest_translator;

pub use language_provider_factory::LanguageProviderFactory;
pub use mock_annotator::MockAnnotator;
pub use mock_translator::MockTranslator;
pub use rest_annotator::RestAnnotator;
pub use rest_translator::RestTranslator;

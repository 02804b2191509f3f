pub mod audio;
pub(crate) mod http;
pub mod language;
pub mod observability;
mod provider_config_error;
pub mod storage;
pub mod text_processing;
pub mod visualization;

pub use provider_config_error::ProviderConfigError;

mod settings;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use ::config::{Config, File};

pub use settings::{
    AnnotationSettings, LoggingSettings, ProviderSetting, RecognitionSettings, ReportSettings,
    Settings, StorageProviderSetting, StorageSettings, SynthesisSettings, TranslationSettings,
    VisualizationSettings,
};

const ENV_PREFIX: &str = "RELINGUA";
const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

/// Deployment environment. Picks the optional `relingua.<name>.toml` settings layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Local,
    Test,
    Prod,
}

impl Environment {
    /// Reads `APP_ENVIRONMENT`; unset means `Local`.
    pub fn from_env() -> Result<Self, SettingsError> {
        match std::env::var(ENVIRONMENT_VAR) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Test => "test",
            Environment::Prod => "prod",
        }
    }

    /// Stem of the settings file layered for this environment.
    pub fn settings_file(&self) -> String {
        format!("relingua.{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Prod),
            _ => Err(SettingsError::UnknownEnvironment(value.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loads settings for the environment named by `APP_ENVIRONMENT` (default `local`).
///
/// Sources, later ones overriding earlier ones: `relingua.<environment>.toml`
/// in the working directory (optional), then `RELINGUA__SECTION__KEY`
/// environment variables.
pub fn load_settings() -> Result<(Environment, Settings), SettingsError> {
    let environment = Environment::from_env()?;

    let settings = Config::builder()
        .add_source(File::with_name(&environment.settings_file()).required(false))
        .add_source(env_source())
        .build()?
        .try_deserialize()?;

    Ok((environment, settings))
}

/// Loads settings from an explicit file, still honouring environment overrides.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let settings = Config::builder()
        .add_source(File::from(path))
        .add_source(env_source())
        .build()?
        .try_deserialize()?;
    Ok(settings)
}

fn env_source() -> ::config::Environment {
    ::config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("unknown environment {0:?}, expected local, test or prod")]
    UnknownEnvironment(String),
    #[error("configuration: {0}")]
    Config(#[from] ::config::ConfigError),
}

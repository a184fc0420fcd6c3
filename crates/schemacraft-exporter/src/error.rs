use schemacraft_config::ConfigError;
use schemacraft_core::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Canonical(#[from] ModelError),
}

impl From<ConfigError> for ExportError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnknownFormat(name) => ExportError::UnsupportedFormat(name),
        }
    }
}

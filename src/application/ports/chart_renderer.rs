use std::path::Path;

use crate::domain::ChartSet;

pub trait ChartRenderer: Send + Sync {
    fn render(&self, charts: &ChartSet, destination: &Path) -> Result<(), ChartRenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChartRenderError {
    #[error("encoding failed: {0}")]
    EncodingFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

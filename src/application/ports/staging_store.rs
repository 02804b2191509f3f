use std::io;

use bytes::Bytes;

use crate::domain::StoragePath;

use super::ServiceFailure;

#[async_trait::async_trait]
pub trait StagingStore: Send + Sync {
    /// Writes `payload` at `path`, replacing any existing object. Returns the stored size.
    async fn put(
        &self,
        path: &StoragePath,
        payload: Bytes,
        content_type: Option<&str>,
    ) -> Result<u64, StagingStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, StagingStoreError>;

    async fn head(&self, path: &StoragePath) -> Result<u64, StagingStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingStoreError {
    #[error("store unreachable: {0}")]
    Unreachable(String),
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl ServiceFailure for StagingStoreError {
    fn is_unreachable(&self) -> bool {
        matches!(self, StagingStoreError::Unreachable(_))
    }
}

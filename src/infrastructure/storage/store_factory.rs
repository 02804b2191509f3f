use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::config::{StorageProviderSetting, StorageSettings};

use super::local_store::LocalStagingStore;
use super::memory_store::MemoryStagingStore;
use super::s3_store::S3StagingStore;

pub struct StagingStoreFactory;

impl StagingStoreFactory {
    /// Local stores are rooted at `<local_path>/<bucket>` so keys match the bucket layout.
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn StagingStore>, StagingStoreError> {
        match settings.provider {
            StorageProviderSetting::Local => {
                let path = PathBuf::from(&settings.local_path).join(&settings.bucket);
                let store = LocalStagingStore::new(path)?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::S3 => {
                let store = S3StagingStore::new(
                    &settings.bucket,
                    settings.s3_region.as_deref(),
                    settings.s3_endpoint.as_deref(),
                )?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Memory => Ok(Arc::new(MemoryStagingStore::new())),
        }
    }
}

use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::StoragePath;

/// In-process store for scaffold runs and tests. Keeps content types alongside payloads.
#[derive(Default)]
pub struct MemoryStagingStore {
    objects: Mutex<HashMap<String, (Bytes, Option<String>)>>,
}

impl MemoryStagingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an object directly, bypassing `put`.
    pub fn insert(&self, path: &StoragePath, payload: impl Into<Bytes>) {
        if let Ok(mut objects) = self.objects.lock() {
            objects.insert(path.as_str().to_string(), (payload.into(), None));
        }
    }

    pub fn content_type(&self, path: &StoragePath) -> Option<String> {
        self.objects
            .lock()
            .ok()
            .and_then(|objects| objects.get(path.as_str()).and_then(|(_, ct)| ct.clone()))
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .objects
            .lock()
            .map(|objects| objects.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }
}

fn poisoned(e: impl std::fmt::Display) -> StagingStoreError {
    StagingStoreError::DownloadFailed(format!("store lock poisoned: {}", e))
}

#[async_trait::async_trait]
impl StagingStore for MemoryStagingStore {
    async fn put(
        &self,
        path: &StoragePath,
        payload: Bytes,
        content_type: Option<&str>,
    ) -> Result<u64, StagingStoreError> {
        let size = payload.len() as u64;
        self.objects.lock().map_err(poisoned)?.insert(
            path.as_str().to_string(),
            (payload, content_type.map(str::to_string)),
        );
        Ok(size)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, StagingStoreError> {
        self.objects
            .lock()
            .map_err(poisoned)?
            .get(path.as_str())
            .map(|(bytes, _)| bytes.to_vec())
            .ok_or_else(|| StagingStoreError::NotFound(path.to_string()))
    }

    async fn head(&self, path: &StoragePath) -> Result<u64, StagingStoreError> {
        self.objects
            .lock()
            .map_err(poisoned)?
            .get(path.as_str())
            .map(|(bytes, _)| bytes.len() as u64)
            .ok_or_else(|| StagingStoreError::NotFound(path.to_string()))
    }
}

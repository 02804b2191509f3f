use std::sync::Arc;

use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as StorePath;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload, RetryConfig};

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::StoragePath;

use super::object_store_error::{Operation, map_store_error};

/// S3 bucket store. Credentials come from the standard `AWS_*` environment variables.
pub struct S3StagingStore {
    inner: Arc<dyn ObjectStore>,
}

impl S3StagingStore {
    pub fn new(
        bucket: &str,
        region: Option<&str>,
        endpoint: Option<&str>,
    ) -> Result<Self, StagingStoreError> {
        let mut builder = AmazonS3Builder::from_env().with_bucket_name(bucket);
        if let Some(region) = region {
            builder = builder.with_region(region);
        }
        if let Some(endpoint) = endpoint {
            builder = builder.with_endpoint(endpoint).with_allow_http(true);
        }
        Self::from_builder(builder)
    }

    /// Every request is attempted exactly once; the client's own retry loop is disabled.
    fn from_builder(builder: AmazonS3Builder) -> Result<Self, StagingStoreError> {
        let store = builder
            .with_retry(RetryConfig {
                max_retries: 0,
                ..Default::default()
            })
            .build()
            .map_err(|e| StagingStoreError::Configuration(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(store),
        })
    }
}

#[async_trait::async_trait]
impl StagingStore for S3StagingStore {
    async fn put(
        &self,
        path: &StoragePath,
        payload: Bytes,
        content_type: Option<&str>,
    ) -> Result<u64, StagingStoreError> {
        let store_path = StorePath::from(path.as_str());
        let size = payload.len() as u64;

        let mut attributes = Attributes::new();
        if let Some(content_type) = content_type {
            attributes.insert(Attribute::ContentType, content_type.to_string().into());
        }
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        self.inner
            .put_opts(&store_path, PutPayload::from(payload), options)
            .await
            .map_err(|e| map_store_error(e, Operation::Put))?;
        Ok(size)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, StagingStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = self
            .inner
            .get(&store_path)
            .await
            .map_err(|e| map_store_error(e, Operation::Get))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| map_store_error(e, Operation::Get))?;

        Ok(bytes.to_vec())
    }

    async fn head(&self, path: &StoragePath) -> Result<u64, StagingStoreError> {
        let store_path = StorePath::from(path.as_str());
        let meta = self
            .inner
            .head(&store_path)
            .await
            .map_err(|e| map_store_error(e, Operation::Get))?;
        Ok(meta.size as u64)
    }
}

use crate::application::ports::StagingStoreError;
use crate::infrastructure::http::is_connect_failure;

pub(crate) enum Operation {
    Put,
    Get,
}

/// Maps an `object_store` failure, separating connect failures and missing objects.
pub(crate) fn map_store_error(error: object_store::Error, operation: Operation) -> StagingStoreError {
    if let object_store::Error::NotFound { path, .. } = &error {
        return StagingStoreError::NotFound(path.clone());
    }
    if is_connect_failure(&error) {
        return StagingStoreError::Unreachable(error.to_string());
    }
    match operation {
        Operation::Put => StagingStoreError::UploadFailed(error.to_string()),
        Operation::Get => StagingStoreError::DownloadFailed(error.to_string()),
    }
}

mod local_store;
mod memory_store;
mod object_store_error;
mod s3_store;
mod store_factory;

pub use local_store::LocalStagingStore;
pub use memory_store::MemoryStagingStore;
pub use s3_store::S3StagingStore;
pub use store_factory::StagingStoreFactory;

use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::ScratchPath;

/// Transient storage for one request's uploaded file. Implementations abort
/// their own partial write when `store` fails, so a failed store leaves
/// nothing behind to clean up.
#[async_trait::async_trait]
pub trait ScratchStore: Send + Sync {
    async fn store(
        &self,
        path: &ScratchPath,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, ScratchStoreError>;

    async fn fetch(&self, path: &ScratchPath) -> Result<Vec<u8>, ScratchStoreError>;

    async fn delete(&self, path: &ScratchPath) -> Result<(), ScratchStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScratchStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

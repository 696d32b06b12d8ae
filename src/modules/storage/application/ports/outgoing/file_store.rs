use async_trait::async_trait;

use crate::storage::application::domain::entities::{UploadKind, UploadedFile};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FileStoreError {
    #[error("Storage error: {0}")]
    IoError(String),
}

/// Persists uploaded files and hands back the public path they are served
/// under. Replaced files are left in place; only the owning record's path
/// field moves.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn store(&self, kind: UploadKind, file: &UploadedFile) -> Result<String, FileStoreError>;
}

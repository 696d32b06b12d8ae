use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;

use crate::storage::application::domain::entities::{UploadKind, UploadedFile};
use crate::storage::application::ports::outgoing::{FileStore, FileStoreError};

/// Writes uploads under `<root>/<kind>/` with collision-resistant names of
/// the form `<epoch-millis>-<random u32>.<original extension>`.
#[derive(Debug, Clone)]
pub struct LocalDiskStore {
    root: PathBuf,
}

impl LocalDiskStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_env() -> Self {
        let root = std::env::var("UPLOAD_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "./uploads".to_string());

        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn unique_name(original_name: &str) -> String {
        let extension = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin");

        let millis = Utc::now().timestamp_millis();
        let suffix: u32 = rand::random();

        format!("{}-{}.{}", millis, suffix, extension)
    }
}

#[async_trait]
impl FileStore for LocalDiskStore {
    async fn store(&self, kind: UploadKind, file: &UploadedFile) -> Result<String, FileStoreError> {
        let dir = self.root.join(kind.subdir());

        fs::create_dir_all(&dir)
            .await
            .map_err(|e| FileStoreError::IoError(e.to_string()))?;

        let name = Self::unique_name(&file.original_name);

        fs::write(dir.join(&name), &file.bytes)
            .await
            .map_err(|e| FileStoreError::IoError(e.to_string()))?;

        Ok(format!("/uploads/{}/{}", kind.subdir(), name))
    }
}

use crate::storage::application::domain::entities::{UploadKind, UploadedFile};

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_image_types: &'static [&'static str],
    pub allowed_document_types: &'static [&'static str],
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("Only images (png/jpg/jpeg/webp) and PDF allowed")]
    UnsupportedFileType,

    #[error("File exceeds the maximum size of {max_bytes} bytes")]
    FileTooLarge { max_bytes: u64 },
}

impl UploadPolicy {
    // image/jpg is not a registered MIME type but browsers emit it
    pub const DEFAULT_ALLOWED_IMAGE_TYPES: &'static [&'static str] =
        &["image/png", "image/jpg", "image/jpeg", "image/webp"];
    pub const DEFAULT_ALLOWED_DOCUMENT_TYPES: &'static [&'static str] = &["application/pdf"];

    pub fn from_env() -> Self {
        let max_file_size_bytes = std::env::var("UPLOAD_MAX_BYTES")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(5 * 1024 * 1024); // 5MB

        Self {
            max_file_size_bytes,
            allowed_image_types: Self::DEFAULT_ALLOWED_IMAGE_TYPES,
            allowed_document_types: Self::DEFAULT_ALLOWED_DOCUMENT_TYPES,
        }
    }

    /// Check a buffered upload against the allow-list for the kind the
    /// endpoint expects. The owning record is only touched after this
    /// passes.
    pub fn validate(
        &self,
        file: &UploadedFile,
        expected: UploadKind,
    ) -> Result<(), UploadPolicyError> {
        if file.bytes.len() as u64 > self.max_file_size_bytes {
            return Err(UploadPolicyError::FileTooLarge {
                max_bytes: self.max_file_size_bytes,
            });
        }

        let allowed = match expected {
            UploadKind::Image => self.allowed_image_types,
            UploadKind::Document => self.allowed_document_types,
        };

        let mime = file.content_type.to_ascii_lowercase();
        if !allowed.contains(&mime.as_str()) {
            return Err(UploadPolicyError::UnsupportedFileType);
        }

        Ok(())
    }
}

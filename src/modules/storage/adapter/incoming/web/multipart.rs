use actix_multipart::Multipart;
use futures::StreamExt;

use crate::storage::application::domain::entities::UploadedFile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MultipartReadError {
    #[error("No file attached under field '{field}'")]
    MissingFile { field: String },

    #[error("File exceeds the maximum size of {max_bytes} bytes")]
    FileTooLarge { max_bytes: u64 },

    #[error("Malformed multipart payload: {0}")]
    ReadError(String),
}

/// Reads exactly one file out of a multipart request, keyed by field name.
/// Other fields are skipped; reading stops at the first match.
pub async fn read_single_file(
    mut payload: Multipart,
    field_name: &str,
    max_bytes: u64,
) -> Result<UploadedFile, MultipartReadError> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| MultipartReadError::ReadError(e.to_string()))?;

        if field.name() != Some(field_name) {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|mime| mime.to_string())
            .unwrap_or_default();

        let original_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(|f| f.to_string())
            .unwrap_or_default();

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| MultipartReadError::ReadError(e.to_string()))?;

            if (bytes.len() + chunk.len()) as u64 > max_bytes {
                return Err(MultipartReadError::FileTooLarge { max_bytes });
            }

            bytes.extend_from_slice(&chunk);
        }

        return Ok(UploadedFile {
            field_name: field_name.to_string(),
            original_name,
            content_type,
            bytes,
        });
    }

    Err(MultipartReadError::MissingFile {
        field: field_name.to_string(),
    })
}

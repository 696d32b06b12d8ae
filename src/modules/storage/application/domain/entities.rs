/// A file read out of a multipart request, fully buffered.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub field_name: String,
    pub original_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Storage bucket for an upload, keyed off MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Document,
}

impl UploadKind {
    pub fn subdir(&self) -> &'static str {
        match self {
            UploadKind::Image => "images",
            UploadKind::Document => "documents",
        }
    }
}

mod error_mapping;
mod multipart;

pub use error_mapping::{multipart_error_response, policy_error_response};
pub use multipart::{read_single_file, MultipartReadError};

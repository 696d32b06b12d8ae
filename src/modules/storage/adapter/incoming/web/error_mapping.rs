use actix_web::HttpResponse;

use crate::shared::api::ApiResponse;
use crate::storage::application::domain::policies::UploadPolicyError;

use super::multipart::MultipartReadError;

pub fn multipart_error_response(err: &MultipartReadError) -> HttpResponse {
    match err {
        MultipartReadError::MissingFile { field } => ApiResponse::bad_request(
            "FILE_REQUIRED",
            &format!("No file attached under field '{}'", field),
        ),
        MultipartReadError::FileTooLarge { .. } => {
            ApiResponse::bad_request("FILE_TOO_LARGE", &err.to_string())
        }
        MultipartReadError::ReadError(_) => {
            ApiResponse::bad_request("MALFORMED_UPLOAD", "Could not read the uploaded file")
        }
    }
}

pub fn policy_error_response(err: &UploadPolicyError) -> HttpResponse {
    match err {
        UploadPolicyError::UnsupportedFileType => {
            ApiResponse::bad_request("UNSUPPORTED_FILE_TYPE", &err.to_string())
        }
        UploadPolicyError::FileTooLarge { .. } => {
            ApiResponse::bad_request("FILE_TOO_LARGE", &err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn missing_file_maps_to_file_required() {
        let resp = multipart_error_response(&MultipartReadError::MissingFile {
            field: "image".to_string(),
        });

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unsupported_type_maps_to_bad_request() {
        let resp = policy_error_response(&UploadPolicyError::UnsupportedFileType);

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

use actix_multipart::Multipart;
use actix_web::{post, web, Responder};

use crate::{
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    profile::application::ports::{
        incoming::use_cases::{UpdateProfileCommand, UpdateProfileError},
        outgoing::UpdateProfileData,
    },
    shared::api::ApiResponse,
    storage::{
        adapter::incoming::web::{
            multipart_error_response, policy_error_response, read_single_file,
        },
        application::domain::entities::UploadKind,
    },
    AppState,
};

/// Replace the profile photo. The previous file stays on disk; only the
/// stored path moves.
#[post("/api/profile/upload-image")]
pub async fn upload_profile_image_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    payload: Multipart,
) -> impl Responder {
    let file = match read_single_file(payload, "image", data.upload_policy.max_file_size_bytes)
        .await
    {
        Ok(file) => file,
        Err(err) => return multipart_error_response(&err),
    };

    if let Err(err) = data.upload_policy.validate(&file, UploadKind::Image) {
        return policy_error_response(&err);
    }

    let path = match data.file_store.store(UploadKind::Image, &file).await {
        Ok(path) => path,
        Err(err) => {
            tracing::error!("Failed to store profile image: {}", err);
            return ApiResponse::internal_error();
        }
    };

    let command = UpdateProfileCommand::new(UpdateProfileData {
        profile_image: Some(path),
        ..Default::default()
    });

    match data.update_profile_use_case.execute(command).await {
        Ok(record) => ApiResponse::success_with("Profile image updated", record),
        Err(UpdateProfileError::RepositoryError(msg)) => {
            tracing::error!("Failed to save profile image path: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

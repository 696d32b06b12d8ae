use actix_multipart::Multipart;
use actix_web::{post, web, Responder};

use crate::{
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    settings::application::ports::{
        incoming::use_cases::{UpdateSettingsCommand, UpdateSettingsError},
        outgoing::UpdateSettingsData,
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

/// Replace the site logo. The previous file stays on disk; only the stored
/// path moves.
#[post("/api/settings/upload-logo")]
pub async fn upload_logo_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    payload: Multipart,
) -> impl Responder {
    let file = match read_single_file(payload, "logo", data.upload_policy.max_file_size_bytes)
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
            tracing::error!("Failed to store logo: {}", err);
            return ApiResponse::internal_error();
        }
    };

    let command = UpdateSettingsCommand::new(UpdateSettingsData {
        logo: Some(path),
        ..Default::default()
    });

    match data.update_settings_use_case.execute(command).await {
        Ok(record) => ApiResponse::success_with("Logo updated", record),
        Err(UpdateSettingsError::RepositoryError(msg)) => {
            tracing::error!("Failed to save logo path: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

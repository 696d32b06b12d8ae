use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    experience::application::ports::incoming::use_cases::DeleteExperienceError,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/experience/{id}")]
pub async fn delete_experience_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .delete_experience_use_case
        .execute(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::message_only("Experience deleted"),
        Err(err) => map_delete_error(err),
    }
}

fn map_delete_error(err: DeleteExperienceError) -> actix_web::HttpResponse {
    match err {
        DeleteExperienceError::ExperienceNotFound => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        DeleteExperienceError::RepositoryError(msg) => {
            tracing::error!("Failed to delete experience: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    achievement::application::ports::incoming::use_cases::DeleteAchievementError,
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/achievements/{id}")]
pub async fn delete_achievement_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .delete_achievement_use_case
        .execute(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::message_only("Achievement deleted"),
        Err(err) => map_delete_error(err),
    }
}

fn map_delete_error(err: DeleteAchievementError) -> actix_web::HttpResponse {
    match err {
        DeleteAchievementError::AchievementNotFound => {
            ApiResponse::not_found("ACHIEVEMENT_NOT_FOUND", "Achievement not found")
        }
        DeleteAchievementError::RepositoryError(msg) => {
            tracing::error!("Failed to delete achievement: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

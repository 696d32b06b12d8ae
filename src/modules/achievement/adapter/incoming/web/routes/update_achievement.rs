use actix_web::{put, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    achievement::application::ports::incoming::use_cases::{
        UpdateAchievementCommand, UpdateAchievementCommandError, UpdateAchievementError,
        UpdateAchievementFields,
    },
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct UpdateAchievementRequest {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub image_url: Option<String>,
    pub proof_url: Option<String>,
    pub featured: Option<bool>,
}

#[put("/api/achievements/{id}")]
pub async fn update_achievement_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateAchievementRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match UpdateAchievementCommand::new(
        path.into_inner(),
        UpdateAchievementFields {
            title: payload.title,
            issuer: payload.issuer,
            category: payload.category,
            date: payload.date,
            image_url: payload.image_url,
            proof_url: payload.proof_url,
            featured: payload.featured,
        },
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.update_achievement_use_case.execute(command).await {
        Ok(record) => ApiResponse::success_with("Achievement updated", record),
        Err(err) => map_update_error(err),
    }
}

fn map_command_error(err: UpdateAchievementCommandError) -> actix_web::HttpResponse {
    match err {
        UpdateAchievementCommandError::InvalidCategory(value) => ApiResponse::bad_request(
            "INVALID_CATEGORY",
            &format!("'{}' is not a valid category", value),
        ),
    }
}

fn map_update_error(err: UpdateAchievementError) -> actix_web::HttpResponse {
    match err {
        UpdateAchievementError::AchievementNotFound => {
            ApiResponse::not_found("ACHIEVEMENT_NOT_FOUND", "Achievement not found")
        }
        UpdateAchievementError::RepositoryError(msg) => {
            tracing::error!("Failed to update achievement: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

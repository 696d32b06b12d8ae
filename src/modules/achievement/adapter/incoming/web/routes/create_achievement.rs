use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    achievement::application::ports::incoming::use_cases::{
        CreateAchievementCommand, CreateAchievementCommandError, CreateAchievementError,
    },
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateAchievementRequest {
    pub title: String,
    pub issuer: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub image_url: Option<String>,
    pub proof_url: Option<String>,
    pub featured: Option<bool>,
}

#[post("/api/achievements")]
pub async fn create_achievement_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    payload: web::Json<CreateAchievementRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateAchievementCommand::new(
        payload.title,
        payload.issuer,
        payload.category,
        payload.date,
        payload.image_url,
        payload.proof_url,
        payload.featured,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.create_achievement_use_case.execute(command).await {
        Ok(record) => ApiResponse::created_with("Achievement added", record),
        Err(err) => map_create_error(err),
    }
}

fn map_command_error(err: CreateAchievementCommandError) -> actix_web::HttpResponse {
    match err {
        CreateAchievementCommandError::TitleRequired => {
            ApiResponse::bad_request("TITLE_REQUIRED", "Title is required")
        }
        CreateAchievementCommandError::InvalidCategory(value) => ApiResponse::bad_request(
            "INVALID_CATEGORY",
            &format!("'{}' is not a valid category", value),
        ),
    }
}

fn map_create_error(err: CreateAchievementError) -> actix_web::HttpResponse {
    match err {
        CreateAchievementError::RepositoryError(msg) => {
            tracing::error!("Failed to create achievement: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

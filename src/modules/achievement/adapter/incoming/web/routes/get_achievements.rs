use actix_web::{get, web, Responder};

use crate::{
    achievement::application::ports::incoming::use_cases::GetAchievementsError,
    shared::api::ApiResponse, AppState,
};

/// Public listing, featured achievements first.
#[get("/api/achievements")]
pub async fn get_achievements_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_achievements_use_case.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(GetAchievementsError::RepositoryError(msg)) => {
            tracing::error!("Failed to list achievements: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

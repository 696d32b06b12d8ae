use actix_web::{get, web, Responder};

use crate::{
    experience::application::ports::incoming::use_cases::GetExperiencesError,
    shared::api::ApiResponse, AppState,
};

/// Public listing, most recent first.
#[get("/api/experience")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_experiences_use_case.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(GetExperiencesError::RepositoryError(msg)) => {
            tracing::error!("Failed to list experience entries: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{get, web, Responder};

use crate::{
    project::application::ports::incoming::use_cases::GetProjectsError,
    shared::api::ApiResponse, AppState,
};

/// Public listing, featured projects first.
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_projects_use_case.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(GetProjectsError::RepositoryError(msg)) => {
            tracing::error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

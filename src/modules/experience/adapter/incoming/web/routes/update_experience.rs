use actix_web::{put, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    experience::application::ports::{
        incoming::use_cases::{UpdateExperienceCommand, UpdateExperienceError},
        outgoing::UpdateExperienceData,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct UpdateExperienceRequest {
    pub role: Option<String>,
    pub company: Option<String>,
    #[serde(rename = "type")]
    pub experience_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub skills: Option<Vec<String>>,
    pub certificate_url: Option<String>,
}

#[put("/api/experience/{id}")]
pub async fn update_experience_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateExperienceRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = UpdateExperienceCommand::new(
        path.into_inner(),
        UpdateExperienceData {
            role: payload.role,
            company: payload.company,
            experience_type: payload.experience_type,
            start_date: payload.start_date,
            end_date: payload.end_date,
            description: payload.description,
            skills: payload.skills,
            certificate_url: payload.certificate_url,
        },
    );

    match data.update_experience_use_case.execute(command).await {
        Ok(record) => ApiResponse::success_with("Experience updated", record),
        Err(err) => map_update_error(err),
    }
}

fn map_update_error(err: UpdateExperienceError) -> actix_web::HttpResponse {
    match err {
        UpdateExperienceError::ExperienceNotFound => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        UpdateExperienceError::RepositoryError(msg) => {
            tracing::error!("Failed to update experience: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

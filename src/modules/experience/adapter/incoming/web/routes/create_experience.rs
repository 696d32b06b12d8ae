use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    experience::application::ports::incoming::use_cases::{
        CreateExperienceCommand, CreateExperienceCommandError, CreateExperienceError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateExperienceRequest {
    pub role: String,
    pub company: String,
    #[serde(rename = "type")]
    pub experience_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub skills: Option<Vec<String>>,
    pub certificate_url: Option<String>,
}

#[post("/api/experience")]
pub async fn create_experience_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    payload: web::Json<CreateExperienceRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateExperienceCommand::new(
        payload.role,
        payload.company,
        payload.experience_type,
        payload.start_date,
        payload.end_date,
        payload.description,
        payload.skills,
        payload.certificate_url,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.create_experience_use_case.execute(command).await {
        Ok(record) => ApiResponse::created_with("Experience added", record),
        Err(err) => map_create_error(err),
    }
}

fn map_command_error(err: CreateExperienceCommandError) -> actix_web::HttpResponse {
    match err {
        CreateExperienceCommandError::RoleRequired => {
            ApiResponse::bad_request("ROLE_REQUIRED", "Role is required")
        }
        CreateExperienceCommandError::CompanyRequired => {
            ApiResponse::bad_request("COMPANY_REQUIRED", "Company is required")
        }
    }
}

fn map_create_error(err: CreateExperienceError) -> actix_web::HttpResponse {
    match err {
        CreateExperienceError::RepositoryError(msg) => {
            tracing::error!("Failed to create experience: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{put, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    project::application::ports::{
        incoming::use_cases::{UpdateProjectCommand, UpdateProjectError},
        outgoing::UpdateProjectData,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub desc: Option<String>,
    pub tech: Option<Vec<String>>,
    pub github: Option<String>,
    pub live: Option<String>,
    pub featured: Option<bool>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateProjectRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = UpdateProjectCommand::new(
        path.into_inner(),
        UpdateProjectData {
            title: payload.title,
            description: payload.desc,
            tech: payload.tech,
            github: payload.github,
            live: payload.live,
            featured: payload.featured,
            project_type: payload.project_type,
        },
    );

    match data.update_project_use_case.execute(command).await {
        Ok(record) => ApiResponse::success_with("Project updated", record),
        Err(err) => map_update_error(err),
    }
}

fn map_update_error(err: UpdateProjectError) -> actix_web::HttpResponse {
    match err {
        UpdateProjectError::ProjectNotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        UpdateProjectError::RepositoryError(msg) => {
            tracing::error!("Failed to update project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

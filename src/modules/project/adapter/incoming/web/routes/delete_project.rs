use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    project::application::ports::incoming::use_cases::DeleteProjectError,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.delete_project_use_case.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::message_only("Project deleted"),
        Err(err) => map_delete_error(err),
    }
}

fn map_delete_error(err: DeleteProjectError) -> actix_web::HttpResponse {
    match err {
        DeleteProjectError::ProjectNotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        DeleteProjectError::RepositoryError(msg) => {
            tracing::error!("Failed to delete project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

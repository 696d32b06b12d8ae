use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    api::schemas::ErrorResponse,
    contact::application::ports::incoming::use_cases::DeleteMessageError,
    shared::api::ApiResponse,
    AppState,
};

/// Permanently delete a message
#[utoipa::path(
    delete,
    path = "/api/contact/{id}",
    tag = "contact",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Message id")),
    responses(
        (status = 200, description = "Message removed"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown message id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/contact/{id}")]
pub async fn delete_message_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    match data.delete_message_use_case.execute(id).await {
        Ok(()) => ApiResponse::message_only("Message deleted"),
        Err(err) => map_delete_error(err),
    }
}

fn map_delete_error(err: DeleteMessageError) -> actix_web::HttpResponse {
    match err {
        DeleteMessageError::MessageNotFound => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }
        DeleteMessageError::RepositoryError(msg) => {
            tracing::error!("Failed to delete contact message: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

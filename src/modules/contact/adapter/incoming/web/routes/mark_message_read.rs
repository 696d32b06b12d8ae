use actix_web::{patch, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    api::schemas::{ErrorResponse, SuccessResponse},
    contact::application::ports::incoming::use_cases::MarkMessageReadError,
    shared::api::ApiResponse,
    AppState,
};

use super::submit_message::ContactMessageResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkReadRequest {
    /// Desired read state; writing the current value is a no-op
    #[schema(example = true)]
    pub is_read: bool,
}

/// Set the read flag on a message
#[utoipa::path(
    patch,
    path = "/api/contact/{id}/read",
    tag = "contact",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Message id")),
    request_body = MarkReadRequest,
    responses(
        (
            status = 200,
            description = "Updated message",
            body = inline(SuccessResponse<ContactMessageResponse>)
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown message id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[patch("/api/contact/{id}/read")]
pub async fn mark_message_read_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<MarkReadRequest>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .mark_message_read_use_case
        .execute(id, payload.is_read)
        .await
    {
        Ok(record) => ApiResponse::success(ContactMessageResponse::from(record)),
        Err(err) => map_mark_read_error(err),
    }
}

fn map_mark_read_error(err: MarkMessageReadError) -> actix_web::HttpResponse {
    match err {
        MarkMessageReadError::MessageNotFound => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }
        MarkMessageReadError::RepositoryError(msg) => {
            tracing::error!("Failed to update read flag: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

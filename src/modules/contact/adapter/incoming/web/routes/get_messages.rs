use actix_web::{get, web, Responder};

use crate::{
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    api::schemas::{ErrorResponse, SuccessResponse},
    contact::application::ports::incoming::use_cases::GetMessagesError,
    shared::api::ApiResponse,
    AppState,
};

use super::submit_message::ContactMessageResponse;

/// List contact messages
///
/// Admin inbox view, most recent first.
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "All stored messages, newest first",
            body = inline(SuccessResponse<Vec<ContactMessageResponse>>)
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/contact")]
pub async fn get_messages_handler(_admin: AdminAccess, data: web::Data<AppState>) -> impl Responder {
    match data.get_messages_use_case.execute().await {
        Ok(records) => ApiResponse::success(
            records
                .into_iter()
                .map(ContactMessageResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(GetMessagesError::RepositoryError(msg)) => {
            tracing::error!("Failed to list contact messages: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    admin::application::ports::incoming::use_cases::{
        UnlockAdminCommand, UnlockAdminCommandError, UnlockAdminError,
    },
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct UnlockRequest {
    /// Shared admin key
    #[schema(example = "change-me")]
    pub key: String,
}

#[derive(Serialize, ToSchema)]
pub struct UnlockResponse {
    /// Signed admin session token, valid for 7 days
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Unlock the admin dashboard
///
/// Exchanges the shared admin key for a signed session token carrying the
/// admin role claim.
#[utoipa::path(
    post,
    path = "/api/admin/unlock",
    tag = "admin",
    request_body = UnlockRequest,
    responses(
        (
            status = 200,
            description = "Dashboard unlocked",
            body = inline(SuccessResponse<UnlockResponse>)
        ),
        (status = 400, description = "Missing admin key", body = ErrorResponse),
        (status = 401, description = "Invalid admin key", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/admin/unlock")]
pub async fn unlock_admin_handler(
    data: web::Data<AppState>,
    payload: web::Json<UnlockRequest>,
) -> impl Responder {
    let command = match UnlockAdminCommand::new(payload.key.clone()) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.unlock_admin_use_case.execute(command).await {
        Ok(token) => {
            ApiResponse::success_with("Dashboard unlocked", UnlockResponse { token })
        }
        Err(err) => map_unlock_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: UnlockAdminCommandError) -> actix_web::HttpResponse {
    match err {
        UnlockAdminCommandError::KeyRequired => {
            ApiResponse::bad_request("KEY_REQUIRED", "Admin key is required")
        }
    }
}

fn map_unlock_error(err: UnlockAdminError) -> actix_web::HttpResponse {
    match err {
        UnlockAdminError::InvalidKey => {
            ApiResponse::unauthorized("INVALID_ADMIN_KEY", "Invalid admin key")
        }
        UnlockAdminError::TokenError(msg) => {
            tracing::error!("Failed to issue admin token: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

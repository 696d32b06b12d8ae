use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    contact::application::ports::{
        incoming::use_cases::{
            SubmitMessageCommand, SubmitMessageCommandError, SubmitMessageError,
        },
        outgoing::ContactMessageRecord,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitMessageRequest {
    /// Visitor name
    #[schema(example = "Ada Lovelace")]
    pub name: String,

    /// Reply-to address
    #[schema(example = "ada@example.com")]
    pub email: String,

    /// Message body
    #[schema(example = "I'd like to talk about a project.")]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ContactMessageResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactMessageRecord> for ContactMessageResponse {
    fn from(record: ContactMessageRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            message: record.message,
            is_read: record.is_read,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Submit a contact message
///
/// Public intake endpoint. The message is persisted unread; the owner
/// notification is dispatched out-of-band and never blocks the response.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmitMessageRequest,
    responses(
        (
            status = 201,
            description = "Message stored",
            body = inline(SuccessResponse<ContactMessageResponse>)
        ),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn submit_message_handler(
    data: web::Data<AppState>,
    payload: web::Json<SubmitMessageRequest>,
) -> impl Responder {
    let command = match SubmitMessageCommand::new(
        payload.name.clone(),
        payload.email.clone(),
        payload.message.clone(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.submit_message_use_case.execute(command).await {
        Ok(record) => ApiResponse::created_with(
            "Message sent successfully",
            ContactMessageResponse::from(record),
        ),
        Err(err) => map_submit_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: SubmitMessageCommandError) -> actix_web::HttpResponse {
    match err {
        SubmitMessageCommandError::NameRequired => {
            ApiResponse::bad_request("NAME_REQUIRED", "Name is required")
        }
        SubmitMessageCommandError::EmailRequired => {
            ApiResponse::bad_request("EMAIL_REQUIRED", "Email is required")
        }
        SubmitMessageCommandError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", "Email address is not valid")
        }
        SubmitMessageCommandError::MessageRequired => {
            ApiResponse::bad_request("MESSAGE_REQUIRED", "Message is required")
        }
    }
}

fn map_submit_error(err: SubmitMessageError) -> actix_web::HttpResponse {
    match err {
        SubmitMessageError::RepositoryError(msg) => {
            tracing::error!("Failed to store contact message: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use chrono::Utc;

    use crate::{
        contact::application::ports::incoming::use_cases::SubmitMessageUseCase,
        tests::support::app_state_builder::TestAppStateBuilder,
    };

    // ============================================================
    // Submit Use Case Mock
    // ============================================================

    #[derive(Clone)]
    struct MockSubmitMessageUseCase {
        result: Result<ContactMessageRecord, SubmitMessageError>,
    }

    impl MockSubmitMessageUseCase {
        fn success(record: ContactMessageRecord) -> Self {
            Self { result: Ok(record) }
        }

        fn repo_error(msg: &str) -> Self {
            Self {
                result: Err(SubmitMessageError::RepositoryError(msg.to_string())),
            }
        }
    }

    #[async_trait]
    impl SubmitMessageUseCase for MockSubmitMessageUseCase {
        async fn execute(
            &self,
            _command: SubmitMessageCommand,
        ) -> Result<ContactMessageRecord, SubmitMessageError> {
            self.result.clone()
        }
    }

    // ============================================================
    // Helpers
    // ============================================================

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    fn sample_record() -> ContactMessageRecord {
        let now = Utc::now();

        ContactMessageRecord {
            id: Uuid::new_v4(),
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
            is_read: false,
            created_at: now,
            updated_at: now,
        }
    }

    // ============================================================
    // Tests
    // ============================================================

    #[actix_web::test]
    async fn submit_valid_message_returns_created_unread() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_submit_message(MockSubmitMessageUseCase::success(sample_record()))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(submit_message_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "message": "hi"
            }))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::CREATED);

        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["is_read"], false);
        assert_eq!(json["message"], "Message sent successfully");
    }

    #[actix_web::test]
    async fn submit_without_name_returns_bad_request() {
        // Arrange
        let state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(state).service(submit_message_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "name": "  ",
                "email": "a@b.com",
                "message": "hi"
            }))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "NAME_REQUIRED");
    }

    #[actix_web::test]
    async fn submit_with_malformed_email_returns_bad_request() {
        // Arrange
        let state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(state).service(submit_message_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "name": "A",
                "email": "not-an-email",
                "message": "hi"
            }))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_EMAIL");
    }

    #[actix_web::test]
    async fn repository_failure_returns_internal_error() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_submit_message(MockSubmitMessageUseCase::repo_error("db down"))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(submit_message_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "message": "hi"
            }))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}

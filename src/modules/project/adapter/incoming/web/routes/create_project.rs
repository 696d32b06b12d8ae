use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    project::application::ports::incoming::use_cases::{
        CreateProjectCommand, CreateProjectCommandError, CreateProjectError,
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
pub struct CreateProjectRequest {
    pub title: String,
    pub desc: String,
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

#[post("/api/projects")]
pub async fn create_project_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    payload: web::Json<CreateProjectRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateProjectCommand::new(
        payload.title,
        payload.desc,
        payload.tech,
        payload.github,
        payload.live,
        payload.featured,
        payload.project_type,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.create_project_use_case.execute(command).await {
        Ok(record) => ApiResponse::created_with("Project created", record),
        Err(err) => map_create_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateProjectCommandError) -> actix_web::HttpResponse {
    match err {
        CreateProjectCommandError::TitleRequired => {
            ApiResponse::bad_request("TITLE_REQUIRED", "Title is required")
        }
        CreateProjectCommandError::DescriptionRequired => {
            ApiResponse::bad_request("DESC_REQUIRED", "Description is required")
        }
    }
}

fn map_create_error(err: CreateProjectError) -> actix_web::HttpResponse {
    match err {
        CreateProjectError::RepositoryError(msg) => {
            tracing::error!("Failed to create project: {}", msg);
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
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::{
        admin::application::ports::outgoing::token_provider::TokenProvider,
        project::application::ports::{
            incoming::use_cases::CreateProjectUseCase, outgoing::ProjectRecord,
        },
        tests::support::{app_state_builder::TestAppStateBuilder, stubs::StubTokenProvider},
    };

    #[derive(Clone)]
    struct MockCreateProjectUseCase {
        result: Result<ProjectRecord, CreateProjectError>,
    }

    #[async_trait]
    impl CreateProjectUseCase for MockCreateProjectUseCase {
        async fn execute(
            &self,
            _command: CreateProjectCommand,
        ) -> Result<ProjectRecord, CreateProjectError> {
            self.result.clone()
        }
    }

    fn sample_record() -> ProjectRecord {
        let now = Utc::now();

        ProjectRecord {
            id: Uuid::new_v4(),
            title: "Portfolio".to_string(),
            description: "A thing I built".to_string(),
            tech: vec!["React".to_string(), "Node".to_string()],
            github: "".to_string(),
            live: "".to_string(),
            featured: false,
            project_type: "General".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn create_project_returns_created_with_message() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_create_project(MockCreateProjectUseCase {
                result: Ok(sample_record()),
            })
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::admin());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({
                "title": "Portfolio",
                "desc": "A thing I built",
                "tech": ["React", "Node"]
            }))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::CREATED);

        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Project created");
        assert_eq!(json["data"]["tech"], serde_json::json!(["React", "Node"]));
        assert_eq!(json["data"]["type"], "General");
    }

    #[actix_web::test]
    async fn blank_title_returns_bad_request() {
        // Arrange
        let state = TestAppStateBuilder::default().build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::admin());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({
                "title": "   ",
                "desc": "A thing I built"
            }))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "TITLE_REQUIRED");
    }

    #[actix_web::test]
    async fn create_without_token_is_unauthorized() {
        // Arrange
        let state = TestAppStateBuilder::default().build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::admin());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(serde_json::json!({
                "title": "Portfolio",
                "desc": "A thing I built"
            }))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}

use actix_web::{put, web, Responder};
use serde::Deserialize;

use crate::{
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    settings::application::ports::{
        incoming::use_cases::{UpdateSettingsCommand, UpdateSettingsError},
        outgoing::UpdateSettingsData,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub portfolio_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub blog: Option<String>,
    pub logo: Option<String>,
}

#[put("/api/settings")]
pub async fn update_settings_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    payload: web::Json<UpdateSettingsRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = UpdateSettingsCommand::new(UpdateSettingsData {
        portfolio_name: payload.portfolio_name,
        email: payload.email,
        phone: payload.phone,
        location: payload.location,
        github: payload.github,
        linkedin: payload.linkedin,
        instagram: payload.instagram,
        blog: payload.blog,
        logo: payload.logo,
    });

    match data.update_settings_use_case.execute(command).await {
        Ok(record) => ApiResponse::success_with("Settings updated", record),
        Err(UpdateSettingsError::RepositoryError(msg)) => {
            tracing::error!("Failed to update settings: {}", msg);
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
        settings::application::ports::{
            incoming::use_cases::UpdateSettingsUseCase, outgoing::SettingsRecord,
        },
        tests::support::{app_state_builder::TestAppStateBuilder, stubs::StubTokenProvider},
    };

    #[derive(Clone)]
    struct MockUpdateSettingsUseCase {
        result: Result<SettingsRecord, UpdateSettingsError>,
    }

    #[async_trait]
    impl UpdateSettingsUseCase for MockUpdateSettingsUseCase {
        async fn execute(
            &self,
            _command: UpdateSettingsCommand,
        ) -> Result<SettingsRecord, UpdateSettingsError> {
            self.result.clone()
        }
    }

    fn named_record(portfolio_name: &str) -> SettingsRecord {
        let now = Utc::now();

        SettingsRecord {
            id: Uuid::new_v4(),
            portfolio_name: portfolio_name.to_string(),
            email: "".to_string(),
            phone: "".to_string(),
            location: "".to_string(),
            github: "".to_string(),
            linkedin: "".to_string(),
            instagram: "".to_string(),
            blog: "".to_string(),
            logo: "".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn update_settings_returns_merged_document() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_update_settings(MockUpdateSettingsUseCase {
                result: Ok(named_record("My Portfolio")),
            })
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::admin());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(update_settings_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/settings")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({ "portfolio_name": "My Portfolio" }))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["data"]["portfolio_name"], "My Portfolio");
        assert_eq!(json["message"], "Settings updated");
    }

    #[actix_web::test]
    async fn update_without_token_is_unauthorized() {
        // Arrange
        let state = TestAppStateBuilder::default().build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::admin());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(update_settings_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/settings")
            .set_json(serde_json::json!({ "portfolio_name": "My Portfolio" }))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}

use actix_web::{get, web, Responder};

use crate::{
    profile::application::ports::incoming::use_cases::GetProfileError, shared::api::ApiResponse,
    AppState,
};

/// Public read of the singleton profile; a fresh datastore yields the
/// default document.
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_profile_use_case.execute().await {
        Ok(record) => ApiResponse::success(record),
        Err(GetProfileError::RepositoryError(msg)) => {
            tracing::error!("Failed to read profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::{
        profile::application::{
            domain::entities::{ProfileLinks, ProfileStats},
            ports::{incoming::use_cases::GetProfileUseCase, outgoing::ProfileRecord},
        },
        tests::support::app_state_builder::TestAppStateBuilder,
    };

    #[derive(Clone)]
    struct MockGetProfileUseCase {
        result: Result<ProfileRecord, GetProfileError>,
    }

    #[async_trait]
    impl GetProfileUseCase for MockGetProfileUseCase {
        async fn execute(&self) -> Result<ProfileRecord, GetProfileError> {
            self.result.clone()
        }
    }

    fn default_record() -> ProfileRecord {
        let now = Utc::now();

        ProfileRecord {
            id: Uuid::new_v4(),
            name: "".to_string(),
            title: "Full Stack Developer".to_string(),
            intro: "".to_string(),
            skills: vec![],
            profile_image: "".to_string(),
            resume_pdf: "".to_string(),
            show_badge: true,
            badge_text: "Available for Freelance Projects".to_string(),
            stats: ProfileStats::default(),
            links: ProfileLinks::default(),
            services: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn get_profile_is_public_and_returns_document() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_get_profile(MockGetProfileUseCase {
                result: Ok(default_record()),
            })
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_profile_handler)).await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["data"]["title"], "Full Stack Developer");
        assert_eq!(json["data"]["show_badge"], true);
    }
}

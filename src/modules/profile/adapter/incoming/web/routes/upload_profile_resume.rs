use actix_multipart::Multipart;
use actix_web::{post, web, Responder};

use crate::{
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    profile::application::ports::{
        incoming::use_cases::{UpdateProfileCommand, UpdateProfileError},
        outgoing::UpdateProfileData,
    },
    shared::api::ApiResponse,
    storage::{
        adapter::incoming::web::{
            multipart_error_response, policy_error_response, read_single_file,
        },
        application::domain::entities::UploadKind,
    },
    AppState,
};

/// Replace the downloadable resume (PDF only).
#[post("/api/profile/upload-resume")]
pub async fn upload_profile_resume_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    payload: Multipart,
) -> impl Responder {
    let file = match read_single_file(payload, "resume", data.upload_policy.max_file_size_bytes)
        .await
    {
        Ok(file) => file,
        Err(err) => return multipart_error_response(&err),
    };

    if let Err(err) = data.upload_policy.validate(&file, UploadKind::Document) {
        return policy_error_response(&err);
    }

    let path = match data.file_store.store(UploadKind::Document, &file).await {
        Ok(path) => path,
        Err(err) => {
            tracing::error!("Failed to store resume: {}", err);
            return ApiResponse::internal_error();
        }
    };

    let command = UpdateProfileCommand::new(UpdateProfileData {
        resume_pdf: Some(path),
        ..Default::default()
    });

    match data.update_profile_use_case.execute(command).await {
        Ok(record) => ApiResponse::success_with("Resume updated", record),
        Err(UpdateProfileError::RepositoryError(msg)) => {
            tracing::error!("Failed to save resume path: {}", msg);
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
        profile::application::{
            domain::entities::{ProfileLinks, ProfileStats},
            ports::{incoming::use_cases::UpdateProfileUseCase, outgoing::ProfileRecord},
        },
        tests::support::{app_state_builder::TestAppStateBuilder, stubs::StubTokenProvider},
    };

    #[derive(Clone)]
    struct PathEchoUpdateProfileUseCase;

    #[async_trait]
    impl UpdateProfileUseCase for PathEchoUpdateProfileUseCase {
        async fn execute(
            &self,
            command: UpdateProfileCommand,
        ) -> Result<ProfileRecord, UpdateProfileError> {
            let now = Utc::now();
            let data = command.into_data();

            Ok(ProfileRecord {
                id: Uuid::new_v4(),
                name: "".to_string(),
                title: "".to_string(),
                intro: "".to_string(),
                skills: vec![],
                profile_image: "".to_string(),
                resume_pdf: data.resume_pdf.unwrap_or_default(),
                show_badge: true,
                badge_text: "".to_string(),
                stats: ProfileStats::default(),
                links: ProfileLinks::default(),
                services: vec![],
                created_at: now,
                updated_at: now,
            })
        }
    }

    fn multipart_body(field: &str, filename: &str, content_type: &str) -> (String, Vec<u8>) {
        let boundary = "test-boundary";

        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             fake-bytes\r\n\
             --{boundary}--\r\n"
        );

        (
            format!("multipart/form-data; boundary={boundary}"),
            body.into_bytes(),
        )
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn pdf_upload_updates_resume_path() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_update_profile(PathEchoUpdateProfileUseCase)
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::admin());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(upload_profile_resume_handler),
        )
        .await;

        let (content_type, body) = multipart_body("resume", "resume.pdf", "application/pdf");

        let req = test::TestRequest::post()
            .uri("/api/profile/upload-resume")
            .insert_header(("Authorization", "Bearer test-token"))
            .insert_header(("Content-Type", content_type))
            .set_payload(body)
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        let path = json["data"]["resume_pdf"].as_str().unwrap();
        assert!(path.starts_with("/uploads/documents/"), "Got {}", path);
    }

    #[actix_web::test]
    async fn image_on_resume_endpoint_is_rejected() {
        // Arrange
        let state = TestAppStateBuilder::default().build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::admin());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(upload_profile_resume_handler),
        )
        .await;

        let (content_type, body) = multipart_body("resume", "photo.png", "image/png");

        let req = test::TestRequest::post()
            .uri("/api/profile/upload-resume")
            .insert_header(("Authorization", "Bearer test-token"))
            .insert_header(("Content-Type", content_type))
            .set_payload(body)
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "UNSUPPORTED_FILE_TYPE");
    }
}

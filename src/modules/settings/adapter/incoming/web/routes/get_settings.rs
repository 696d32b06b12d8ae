use actix_web::{get, web, Responder};

use crate::{
    settings::application::ports::incoming::use_cases::GetSettingsError, shared::api::ApiResponse,
    AppState,
};

/// Public read of the singleton site settings.
#[get("/api/settings")]
pub async fn get_settings_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_settings_use_case.execute().await {
        Ok(record) => ApiResponse::success(record),
        Err(GetSettingsError::RepositoryError(msg)) => {
            tracing::error!("Failed to read settings: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

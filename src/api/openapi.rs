use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Admin
use crate::admin::adapter::incoming::web::routes::{UnlockRequest, UnlockResponse};

// Contact
use crate::contact::adapter::incoming::web::routes::{
    ContactMessageResponse, MarkReadRequest, SubmitMessageRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "REST backend for a personal portfolio site: profile, projects, experience, achievements, settings and contact intake",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Admin endpoints
        crate::admin::adapter::incoming::web::routes::unlock_admin_handler,

        // Contact endpoints
        crate::contact::adapter::incoming::web::routes::submit_message_handler,
        crate::contact::adapter::incoming::web::routes::get_messages_handler,
        crate::contact::adapter::incoming::web::routes::mark_message_read_handler,
        crate::contact::adapter::incoming::web::routes::delete_message_handler,

        // Profile endpoints
        // get_profile_handler,
        // update_profile_handler,
        // upload_profile_image_handler,
        // upload_profile_resume_handler,

        // Project endpoints
        // get_projects_handler,
        // create_project_handler,
        // update_project_handler,
        // delete_project_handler,

        // Experience endpoints
        // get_experiences_handler,
        // create_experience_handler,
        // update_experience_handler,
        // delete_experience_handler,

        // Achievement endpoints
        // get_achievements_handler,
        // create_achievement_handler,
        // update_achievement_handler,
        // delete_achievement_handler,

        // Settings endpoints
        // get_settings_handler,
        // update_settings_handler,
        // upload_logo_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<UnlockResponse>,
            ErrorResponse,
            ErrorDetail,

            // Admin DTOs
            UnlockRequest,
            UnlockResponse,

            // Contact DTOs
            SubmitMessageRequest,
            MarkReadRequest,
            ContactMessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "admin", description = "Dashboard unlock endpoint"),
        (name = "contact", description = "Contact intake and admin inbox"),
        (name = "profile", description = "Singleton profile document"),
        (name = "projects", description = "Project management endpoints"),
        (name = "experience", description = "Experience management endpoints"),
        (name = "achievements", description = "Achievement management endpoints"),
        (name = "settings", description = "Singleton site settings"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin session token from /api/admin/unlock"))
                        .build(),
                ),
            )
        }
    }
}

use actix_web::{put, web, Responder};
use serde::Deserialize;

use crate::{
    admin::adapter::incoming::web::extractors::admin::AdminAccess,
    profile::application::{
        domain::entities::ServiceCard,
        ports::{
            incoming::use_cases::{UpdateProfileCommand, UpdateProfileError},
            outgoing::{UpdateLinksData, UpdateProfileData, UpdateStatsData},
        },
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
pub struct StatsPatch {
    pub projects: Option<String>,
    pub internships: Option<String>,
    pub open_source: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LinksPatch {
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub intro: Option<String>,
    pub skills: Option<Vec<String>>,
    pub profile_image: Option<String>,
    pub resume_pdf: Option<String>,
    pub show_badge: Option<bool>,
    pub badge_text: Option<String>,
    pub stats: Option<StatsPatch>,
    pub links: Option<LinksPatch>,
    pub services: Option<Vec<ServiceCard>>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[put("/api/profile")]
pub async fn update_profile_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
    payload: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = UpdateProfileCommand::new(UpdateProfileData {
        name: payload.name,
        title: payload.title,
        intro: payload.intro,
        skills: payload.skills,
        profile_image: payload.profile_image,
        resume_pdf: payload.resume_pdf,
        show_badge: payload.show_badge,
        badge_text: payload.badge_text,
        stats: payload.stats.map(|s| UpdateStatsData {
            projects: s.projects,
            internships: s.internships,
            open_source: s.open_source,
        }),
        links: payload.links.map(|l| UpdateLinksData {
            github: l.github,
            linkedin: l.linkedin,
        }),
        services: payload.services,
    });

    match data.update_profile_use_case.execute(command).await {
        Ok(record) => ApiResponse::success_with("Profile updated", record),
        Err(UpdateProfileError::RepositoryError(msg)) => {
            tracing::error!("Failed to update profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

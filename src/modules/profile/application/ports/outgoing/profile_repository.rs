use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::profile::application::domain::entities::{ProfileLinks, ProfileStats, ServiceCard};

// Canonical view of the single profile document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub intro: String,
    pub skills: Vec<String>,
    pub profile_image: String,
    pub resume_pdf: String,
    pub show_badge: bool,
    pub badge_text: String,
    pub stats: ProfileStats,
    pub links: ProfileLinks,
    pub services: Vec<ServiceCard>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field-wise merge payload for the nested stats object.
#[derive(Debug, Clone, Default)]
pub struct UpdateStatsData {
    pub projects: Option<String>,
    pub internships: Option<String>,
    pub open_source: Option<String>,
}

/// Field-wise merge payload for the nested links object.
#[derive(Debug, Clone, Default)]
pub struct UpdateLinksData {
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

/// Merge payload; fields left `None` keep their stored value. `stats` and
/// `links` merge field-wise, `services` replaces wholesale when present.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileData {
    pub name: Option<String>,
    pub title: Option<String>,
    pub intro: Option<String>,
    pub skills: Option<Vec<String>>,
    pub profile_image: Option<String>,
    pub resume_pdf: Option<String>,
    pub show_badge: Option<bool>,
    pub badge_text: Option<String>,
    pub stats: Option<UpdateStatsData>,
    pub links: Option<UpdateLinksData>,
    pub services: Option<Vec<ServiceCard>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Return the singleton document, creating it with defaults when the
    /// table is empty.
    async fn get_or_create_default(&self) -> Result<ProfileRecord, ProfileRepositoryError>;

    /// Merge the supplied fields onto the singleton document, creating it
    /// with defaults first when absent.
    async fn update(&self, data: UpdateProfileData)
        -> Result<ProfileRecord, ProfileRepositoryError>;

    /// Idempotent startup seeding: insert the default document only when
    /// none exists yet.
    async fn ensure_default(&self) -> Result<(), ProfileRepositoryError>;
}

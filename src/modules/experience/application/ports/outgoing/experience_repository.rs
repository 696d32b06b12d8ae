use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// Input DTO for persisting a new experience entry
#[derive(Debug, Clone)]
pub struct CreateExperienceData {
    pub role: String,
    pub company: String,
    pub experience_type: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub skills: Vec<String>,
    pub certificate_url: String,
}

/// Merge payload; fields left `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateExperienceData {
    pub role: Option<String>,
    pub company: Option<String>,
    pub experience_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub skills: Option<Vec<String>>,
    pub certificate_url: Option<String>,
}

// Canonical view of a stored experience entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    #[serde(rename = "type")]
    pub experience_type: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub skills: Vec<String>,
    pub certificate_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Experience not found")]
    ExperienceNotFound,
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn insert(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: UpdateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError>;
}

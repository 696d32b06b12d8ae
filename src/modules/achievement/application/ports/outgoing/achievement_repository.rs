use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::achievement::application::domain::entities::AchievementCategory;

// Input DTO for persisting a new achievement
#[derive(Debug, Clone)]
pub struct CreateAchievementData {
    pub title: String,
    pub issuer: String,
    pub category: AchievementCategory,
    pub date: String,
    pub image_url: String,
    pub proof_url: String,
    pub featured: bool,
}

/// Merge payload; fields left `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateAchievementData {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub category: Option<AchievementCategory>,
    pub date: Option<String>,
    pub image_url: Option<String>,
    pub proof_url: Option<String>,
    pub featured: Option<bool>,
}

// Canonical view of a stored achievement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementRecord {
    pub id: Uuid,
    pub title: String,
    pub issuer: String,
    pub category: AchievementCategory,
    pub date: String,
    pub image_url: String,
    pub proof_url: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AchievementRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Achievement not found")]
    AchievementNotFound,
}

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    async fn insert(
        &self,
        data: CreateAchievementData,
    ) -> Result<AchievementRecord, AchievementRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: UpdateAchievementData,
    ) -> Result<AchievementRecord, AchievementRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), AchievementRepositoryError>;
}

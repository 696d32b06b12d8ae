use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// Canonical view of the single site-settings document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsRecord {
    pub id: Uuid,
    pub portfolio_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
    pub instagram: String,
    pub blog: String,
    pub logo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Merge payload; fields left `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateSettingsData {
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

#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Return the singleton document, creating it with defaults when the
    /// table is empty.
    async fn get_or_create_default(&self) -> Result<SettingsRecord, SettingsRepositoryError>;

    /// Merge the supplied fields onto the singleton document, creating it
    /// with defaults first when absent.
    async fn update(
        &self,
        data: UpdateSettingsData,
    ) -> Result<SettingsRecord, SettingsRepositoryError>;

    /// Idempotent startup seeding.
    async fn ensure_default(&self) -> Result<(), SettingsRepositoryError>;
}

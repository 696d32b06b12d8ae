use async_trait::async_trait;

use super::experience_repository::ExperienceRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ExperienceQuery: Send + Sync {
    /// All entries, most recent first.
    async fn list(&self) -> Result<Vec<ExperienceRecord>, ExperienceQueryError>;
}

use async_trait::async_trait;

use super::achievement_repository::AchievementRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AchievementQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AchievementQuery: Send + Sync {
    /// All achievements, featured first, then most recent first.
    async fn list(&self) -> Result<Vec<AchievementRecord>, AchievementQueryError>;
}

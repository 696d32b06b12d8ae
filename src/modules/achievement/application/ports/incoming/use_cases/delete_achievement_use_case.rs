use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteAchievementError {
    #[error("Achievement not found")]
    AchievementNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteAchievementUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteAchievementError>;
}

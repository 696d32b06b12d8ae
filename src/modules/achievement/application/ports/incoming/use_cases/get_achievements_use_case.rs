use async_trait::async_trait;

use crate::achievement::application::ports::outgoing::AchievementRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAchievementsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetAchievementsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<AchievementRecord>, GetAchievementsError>;
}

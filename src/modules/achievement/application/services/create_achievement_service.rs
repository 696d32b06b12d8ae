use async_trait::async_trait;

use crate::achievement::application::ports::{
    incoming::use_cases::{
        CreateAchievementCommand, CreateAchievementError, CreateAchievementUseCase,
    },
    outgoing::{AchievementRecord, AchievementRepository},
};

#[derive(Debug, Clone)]
pub struct CreateAchievementService<R>
where
    R: AchievementRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateAchievementService<R>
where
    R: AchievementRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateAchievementUseCase for CreateAchievementService<R>
where
    R: AchievementRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateAchievementCommand,
    ) -> Result<AchievementRecord, CreateAchievementError> {
        self.repository
            .insert(command.into_data())
            .await
            .map_err(|e| CreateAchievementError::RepositoryError(e.to_string()))
    }
}

use async_trait::async_trait;

use crate::achievement::application::ports::{
    incoming::use_cases::{
        UpdateAchievementCommand, UpdateAchievementError, UpdateAchievementUseCase,
    },
    outgoing::{AchievementRecord, AchievementRepository, AchievementRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateAchievementService<R>
where
    R: AchievementRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateAchievementService<R>
where
    R: AchievementRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateAchievementUseCase for UpdateAchievementService<R>
where
    R: AchievementRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateAchievementCommand,
    ) -> Result<AchievementRecord, UpdateAchievementError> {
        let id = command.id();

        self.repository
            .update(id, command.into_data())
            .await
            .map_err(|e| match e {
                AchievementRepositoryError::AchievementNotFound => {
                    UpdateAchievementError::AchievementNotFound
                }
                other => UpdateAchievementError::RepositoryError(other.to_string()),
            })
    }
}

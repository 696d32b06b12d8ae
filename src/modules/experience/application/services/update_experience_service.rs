use async_trait::async_trait;

use crate::experience::application::ports::{
    incoming::use_cases::{
        UpdateExperienceCommand, UpdateExperienceError, UpdateExperienceUseCase,
    },
    outgoing::{ExperienceRecord, ExperienceRepository, ExperienceRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateExperienceUseCase for UpdateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateExperienceCommand,
    ) -> Result<ExperienceRecord, UpdateExperienceError> {
        let id = command.id();

        self.repository
            .update(id, command.into_data())
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::ExperienceNotFound => {
                    UpdateExperienceError::ExperienceNotFound
                }
                other => UpdateExperienceError::RepositoryError(other.to_string()),
            })
    }
}

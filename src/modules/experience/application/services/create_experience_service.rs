use async_trait::async_trait;

use crate::experience::application::ports::{
    incoming::use_cases::{
        CreateExperienceCommand, CreateExperienceError, CreateExperienceUseCase,
    },
    outgoing::{ExperienceRecord, ExperienceRepository},
};

#[derive(Debug, Clone)]
pub struct CreateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateExperienceUseCase for CreateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateExperienceCommand,
    ) -> Result<ExperienceRecord, CreateExperienceError> {
        self.repository
            .insert(command.into_data())
            .await
            .map_err(|e| CreateExperienceError::RepositoryError(e.to_string()))
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::experience::application::ports::{
    incoming::use_cases::{DeleteExperienceError, DeleteExperienceUseCase},
    outgoing::{ExperienceRepository, ExperienceRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteExperienceUseCase for DeleteExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteExperienceError> {
        self.repository.delete(id).await.map_err(|e| match e {
            ExperienceRepositoryError::ExperienceNotFound => {
                DeleteExperienceError::ExperienceNotFound
            }
            other => DeleteExperienceError::RepositoryError(other.to_string()),
        })
    }
}

use async_trait::async_trait;

use crate::experience::application::ports::outgoing::ExperienceRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetExperiencesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetExperiencesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, GetExperiencesError>;
}

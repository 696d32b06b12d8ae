use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteExperienceError {
    #[error("Experience not found")]
    ExperienceNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteExperienceError>;
}

use async_trait::async_trait;

use crate::project::application::ports::outgoing::ProjectRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProjectRecord>, GetProjectsError>;
}

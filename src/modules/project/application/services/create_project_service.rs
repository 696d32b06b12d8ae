use async_trait::async_trait;

use crate::project::application::ports::{
    incoming::use_cases::{CreateProjectCommand, CreateProjectError, CreateProjectUseCase},
    outgoing::{ProjectRecord, ProjectRepository},
};

#[derive(Debug, Clone)]
pub struct CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateProjectCommand,
    ) -> Result<ProjectRecord, CreateProjectError> {
        self.repository
            .insert(command.into_data())
            .await
            .map_err(|e| CreateProjectError::RepositoryError(e.to_string()))
    }
}

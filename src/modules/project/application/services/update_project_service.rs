use async_trait::async_trait;

use crate::project::application::ports::{
    incoming::use_cases::{UpdateProjectCommand, UpdateProjectError, UpdateProjectUseCase},
    outgoing::{ProjectRecord, ProjectRepository, ProjectRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateProjectCommand,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        let id = command.id();

        self.repository
            .update(id, command.into_data())
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::ProjectNotFound => UpdateProjectError::ProjectNotFound,
                other => UpdateProjectError::RepositoryError(other.to_string()),
            })
    }
}

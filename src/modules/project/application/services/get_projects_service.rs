use async_trait::async_trait;

use crate::project::application::ports::{
    incoming::use_cases::{GetProjectsError, GetProjectsUseCase},
    outgoing::{ProjectQuery, ProjectRecord},
};

#[derive(Debug, Clone)]
pub struct GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProjectRecord>, GetProjectsError> {
        self.query
            .list()
            .await
            .map_err(|e| GetProjectsError::RepositoryError(e.to_string()))
    }
}

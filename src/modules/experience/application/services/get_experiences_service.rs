use async_trait::async_trait;

use crate::experience::application::ports::{
    incoming::use_cases::{GetExperiencesError, GetExperiencesUseCase},
    outgoing::{ExperienceQuery, ExperienceRecord},
};

#[derive(Debug, Clone)]
pub struct GetExperiencesService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetExperiencesService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetExperiencesUseCase for GetExperiencesService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, GetExperiencesError> {
        self.query
            .list()
            .await
            .map_err(|e| GetExperiencesError::RepositoryError(e.to_string()))
    }
}

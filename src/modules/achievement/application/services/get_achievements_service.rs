use async_trait::async_trait;

use crate::achievement::application::ports::{
    incoming::use_cases::{GetAchievementsError, GetAchievementsUseCase},
    outgoing::{AchievementQuery, AchievementRecord},
};

#[derive(Debug, Clone)]
pub struct GetAchievementsService<Q>
where
    Q: AchievementQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetAchievementsService<Q>
where
    Q: AchievementQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAchievementsUseCase for GetAchievementsService<Q>
where
    Q: AchievementQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<AchievementRecord>, GetAchievementsError> {
        self.query
            .list()
            .await
            .map_err(|e| GetAchievementsError::RepositoryError(e.to_string()))
    }
}

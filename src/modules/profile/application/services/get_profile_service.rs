use async_trait::async_trait;

use crate::profile::application::ports::{
    incoming::use_cases::{GetProfileError, GetProfileUseCase},
    outgoing::{ProfileRecord, ProfileRepository},
};

#[derive(Debug, Clone)]
pub struct GetProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProfileUseCase for GetProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self) -> Result<ProfileRecord, GetProfileError> {
        self.repository
            .get_or_create_default()
            .await
            .map_err(|e| GetProfileError::RepositoryError(e.to_string()))
    }
}

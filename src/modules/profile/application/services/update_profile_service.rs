use async_trait::async_trait;

use crate::profile::application::ports::{
    incoming::use_cases::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase},
    outgoing::{ProfileRecord, ProfileRepository},
};

#[derive(Debug, Clone)]
pub struct UpdateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<ProfileRecord, UpdateProfileError> {
        self.repository
            .update(command.into_data())
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))
    }
}

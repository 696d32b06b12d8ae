use async_trait::async_trait;

use crate::settings::application::ports::{
    incoming::use_cases::{UpdateSettingsCommand, UpdateSettingsError, UpdateSettingsUseCase},
    outgoing::{SettingsRecord, SettingsRepository},
};

#[derive(Debug, Clone)]
pub struct UpdateSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateSettingsUseCase for UpdateSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateSettingsCommand,
    ) -> Result<SettingsRecord, UpdateSettingsError> {
        self.repository
            .update(command.into_data())
            .await
            .map_err(|e| UpdateSettingsError::RepositoryError(e.to_string()))
    }
}

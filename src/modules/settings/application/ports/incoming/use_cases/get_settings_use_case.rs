use async_trait::async_trait;

use crate::settings::application::ports::outgoing::SettingsRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSettingsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSettingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<SettingsRecord, GetSettingsError>;
}

use async_trait::async_trait;

use crate::settings::application::ports::outgoing::{SettingsRecord, UpdateSettingsData};

/// Merge-update of the singleton settings document.
#[derive(Debug, Clone)]
pub struct UpdateSettingsCommand {
    data: UpdateSettingsData,
}

impl UpdateSettingsCommand {
    pub fn new(data: UpdateSettingsData) -> Self {
        Self { data }
    }

    pub fn into_data(self) -> UpdateSettingsData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSettingsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateSettingsCommand,
    ) -> Result<SettingsRecord, UpdateSettingsError>;
}

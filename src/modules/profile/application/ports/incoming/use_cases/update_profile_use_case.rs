use async_trait::async_trait;

use crate::profile::application::ports::outgoing::{ProfileRecord, UpdateProfileData};

/// Merge-update of the singleton profile document.
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    data: UpdateProfileData,
}

impl UpdateProfileCommand {
    pub fn new(data: UpdateProfileData) -> Self {
        Self { data }
    }

    pub fn into_data(self) -> UpdateProfileData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProfileCommand)
        -> Result<ProfileRecord, UpdateProfileError>;
}

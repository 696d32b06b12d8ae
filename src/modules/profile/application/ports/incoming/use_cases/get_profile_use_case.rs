use async_trait::async_trait;

use crate::profile::application::ports::outgoing::ProfileRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Read the singleton profile; a fresh datastore yields the default
/// document rather than a not-found.
#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProfileRecord, GetProfileError>;
}

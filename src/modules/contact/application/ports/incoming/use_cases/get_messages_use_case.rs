use async_trait::async_trait;

use crate::contact::application::ports::outgoing::ContactMessageRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMessagesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContactMessageRecord>, GetMessagesError>;
}

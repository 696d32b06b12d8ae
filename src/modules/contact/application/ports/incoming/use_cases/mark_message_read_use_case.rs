use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::application::ports::outgoing::ContactMessageRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkMessageReadError {
    #[error("Message not found")]
    MessageNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Sets the read flag to the supplied value; repeat calls with the same
/// value succeed and leave the record unchanged.
#[async_trait]
pub trait MarkMessageReadUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        is_read: bool,
    ) -> Result<ContactMessageRecord, MarkMessageReadError>;
}

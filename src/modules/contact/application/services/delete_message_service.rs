use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::application::ports::{
    incoming::use_cases::{DeleteMessageError, DeleteMessageUseCase},
    outgoing::{ContactRepository, ContactRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteMessageService<R>
where
    R: ContactRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteMessageService<R>
where
    R: ContactRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteMessageUseCase for DeleteMessageService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteMessageError> {
        self.repository.delete(id).await.map_err(|e| match e {
            ContactRepositoryError::MessageNotFound => DeleteMessageError::MessageNotFound,
            other => DeleteMessageError::RepositoryError(other.to_string()),
        })
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::contact::application::ports::{
    incoming::use_cases::{SubmitMessageCommand, SubmitMessageError, SubmitMessageUseCase},
    outgoing::{
        ContactMessageRecord, ContactNotifier, ContactRepository, CreateContactMessageData,
    },
};

/// Persists a visitor message, then hands it to the notifier on a detached
/// task. Delivery failures are logged and never fail the submission.
#[derive(Clone)]
pub struct SubmitMessageService<R>
where
    R: ContactRepository + Send + Sync,
{
    repository: R,
    notifier: Arc<dyn ContactNotifier + Send + Sync>,
}

impl<R> SubmitMessageService<R>
where
    R: ContactRepository + Send + Sync,
{
    pub fn new(repository: R, notifier: Arc<dyn ContactNotifier + Send + Sync>) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl<R> SubmitMessageUseCase for SubmitMessageService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitMessageCommand,
    ) -> Result<ContactMessageRecord, SubmitMessageError> {
        let data = CreateContactMessageData {
            name: command.name().to_string(),
            email: command.email().to_string(),
            message: command.message().to_string(),
        };

        let record = self
            .repository
            .insert(data)
            .await
            .map_err(|e| SubmitMessageError::RepositoryError(e.to_string()))?;

        let notifier = Arc::clone(&self.notifier);
        let outbound = record.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.notify_new_message(outbound).await {
                tracing::error!("Contact notification failed: {}", e);
            }
        });

        Ok(record)
    }
}

use super::contact_repository::ContactMessageRecord;

#[derive(Debug, thiserror::Error)]
pub enum ContactNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Outbound notification fired when a visitor leaves a message. Delivery is
/// best-effort; the intake use case never fails on notifier errors.
#[async_trait::async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify_new_message(
        &self,
        message: ContactMessageRecord,
    ) -> Result<(), ContactNotificationError>;
}

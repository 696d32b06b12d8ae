use crate::contact::application::ports::outgoing::{
    ContactMessageRecord, ContactNotificationError, ContactNotifier,
};
use crate::email::application::ports::outgoing::email_sender::EmailSender;

/// Renders and sends the owner-facing notification for a new contact
/// message.
pub struct ContactEmailService<S>
where
    S: EmailSender,
{
    sender: S,
    to_address: String,
}

impl<S> ContactEmailService<S>
where
    S: EmailSender,
{
    pub fn new(sender: S, to_address: String) -> Self {
        Self { sender, to_address }
    }

    fn render_subject(message: &ContactMessageRecord) -> String {
        format!("New Portfolio Message from {}", message.name)
    }

    fn render_body(message: &ContactMessageRecord) -> String {
        format!(
            r#"<h2>New Message Received</h2>
<p><b>Name:</b> {}</p>
<p><b>Email:</b> {}</p>
<p><b>Message:</b></p>
<p style="white-space:pre-line;">{}</p>"#,
            message.name, message.email, message.message
        )
    }
}

#[async_trait::async_trait]
impl<S> ContactNotifier for ContactEmailService<S>
where
    S: EmailSender,
{
    async fn notify_new_message(
        &self,
        message: ContactMessageRecord,
    ) -> Result<(), ContactNotificationError> {
        let subject = Self::render_subject(&message);
        let body = Self::render_body(&message);

        self.sender
            .send_email(&self.to_address, &subject, &body)
            .await
            .map_err(ContactNotificationError::EmailSendingFailed)
    }
}

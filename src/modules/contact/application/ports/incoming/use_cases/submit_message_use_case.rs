use async_trait::async_trait;
use email_address::EmailAddress;

use crate::contact::application::ports::outgoing::ContactMessageRecord;

//
// ──────────────────────────────────────────────────────────
// Submit Message Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SubmitMessageCommand {
    name: String,
    email: String,
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitMessageCommandError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Message is required")]
    MessageRequired,
}

impl SubmitMessageCommand {
    pub fn new(
        name: String,
        email: String,
        message: String,
    ) -> Result<Self, SubmitMessageCommandError> {
        if name.trim().is_empty() {
            return Err(SubmitMessageCommandError::NameRequired);
        }

        let email = email.trim().to_string();
        if email.is_empty() {
            return Err(SubmitMessageCommandError::EmailRequired);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(SubmitMessageCommandError::InvalidEmail);
        }

        if message.trim().is_empty() {
            return Err(SubmitMessageCommandError::MessageRequired);
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitMessageCommand,
    ) -> Result<ContactMessageRecord, SubmitMessageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_rejects_blank_name() {
        let result = SubmitMessageCommand::new(
            "  ".to_string(),
            "a@b.com".to_string(),
            "hi".to_string(),
        );

        assert!(matches!(result, Err(SubmitMessageCommandError::NameRequired)));
    }

    #[test]
    fn command_rejects_blank_email() {
        let result =
            SubmitMessageCommand::new("A".to_string(), "".to_string(), "hi".to_string());

        assert!(matches!(
            result,
            Err(SubmitMessageCommandError::EmailRequired)
        ));
    }

    #[test]
    fn command_rejects_malformed_email() {
        let result = SubmitMessageCommand::new(
            "A".to_string(),
            "not-an-email".to_string(),
            "hi".to_string(),
        );

        assert!(matches!(
            result,
            Err(SubmitMessageCommandError::InvalidEmail)
        ));
    }

    #[test]
    fn command_rejects_blank_message() {
        let result =
            SubmitMessageCommand::new("A".to_string(), "a@b.com".to_string(), " ".to_string());

        assert!(matches!(
            result,
            Err(SubmitMessageCommandError::MessageRequired)
        ));
    }

    #[test]
    fn command_trims_email_only() {
        let command = SubmitMessageCommand::new(
            "A".to_string(),
            "  a@b.com  ".to_string(),
            "hi".to_string(),
        )
        .unwrap();

        assert_eq!(command.email(), "a@b.com");
        assert_eq!(command.name(), "A");
        assert_eq!(command.message(), "hi");
    }
}

use async_trait::async_trait;

//
// ──────────────────────────────────────────────────────────
// Unlock Admin Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UnlockAdminCommand {
    key: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UnlockAdminCommandError {
    #[error("Admin key is required")]
    KeyRequired,
}

impl UnlockAdminCommand {
    pub fn new(key: String) -> Result<Self, UnlockAdminCommandError> {
        if key.trim().is_empty() {
            return Err(UnlockAdminCommandError::KeyRequired);
        }

        Ok(Self { key })
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UnlockAdminError {
    #[error("Invalid admin key")]
    InvalidKey,

    #[error("Token error: {0}")]
    TokenError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UnlockAdminUseCase: Send + Sync {
    async fn execute(&self, command: UnlockAdminCommand) -> Result<String, UnlockAdminError>;
}

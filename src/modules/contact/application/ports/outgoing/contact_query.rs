use async_trait::async_trait;

use super::contact_repository::ContactMessageRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactQuery: Send + Sync {
    /// All messages, most recent first.
    async fn list(&self) -> Result<Vec<ContactMessageRecord>, ContactQueryError>;
}

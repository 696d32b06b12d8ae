use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// Input DTO for persisting a new message
#[derive(Debug, Clone)]
pub struct CreateContactMessageData {
    pub name: String,
    pub email: String,
    pub message: String,
}

// Canonical view of a stored contact message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessageRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Message not found")]
    MessageNotFound,
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(
        &self,
        data: CreateContactMessageData,
    ) -> Result<ContactMessageRecord, ContactRepositoryError>;

    /// Sets the read flag directly; writing the current value is a no-op.
    async fn set_read(
        &self,
        id: Uuid,
        is_read: bool,
    ) -> Result<ContactMessageRecord, ContactRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError>;
}

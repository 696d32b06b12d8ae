use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::application::ports::{
    incoming::use_cases::{MarkMessageReadError, MarkMessageReadUseCase},
    outgoing::{ContactMessageRecord, ContactRepository, ContactRepositoryError},
};

#[derive(Debug, Clone)]
pub struct MarkMessageReadService<R>
where
    R: ContactRepository + Send + Sync,
{
    repository: R,
}

impl<R> MarkMessageReadService<R>
where
    R: ContactRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> MarkMessageReadUseCase for MarkMessageReadService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        is_read: bool,
    ) -> Result<ContactMessageRecord, MarkMessageReadError> {
        self.repository
            .set_read(id, is_read)
            .await
            .map_err(|e| match e {
                ContactRepositoryError::MessageNotFound => MarkMessageReadError::MessageNotFound,
                other => MarkMessageReadError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    use crate::contact::application::ports::outgoing::CreateContactMessageData;

    /// In-memory repository tracking the read flag, to exercise the
    /// idempotence of repeated mark-read calls.
    struct InMemoryContactRepository {
        record: Mutex<ContactMessageRecord>,
    }

    #[async_trait]
    impl ContactRepository for InMemoryContactRepository {
        async fn insert(
            &self,
            _data: CreateContactMessageData,
        ) -> Result<ContactMessageRecord, ContactRepositoryError> {
            unimplemented!("Not used in mark-read tests")
        }

        async fn set_read(
            &self,
            id: Uuid,
            is_read: bool,
        ) -> Result<ContactMessageRecord, ContactRepositoryError> {
            let mut record = self.record.lock().unwrap();
            if record.id != id {
                return Err(ContactRepositoryError::MessageNotFound);
            }
            record.is_read = is_read;
            Ok(record.clone())
        }

        async fn delete(&self, _id: Uuid) -> Result<(), ContactRepositoryError> {
            unimplemented!("Not used in mark-read tests")
        }
    }

    fn repository_with(id: Uuid) -> InMemoryContactRepository {
        let now = Utc::now();

        InMemoryContactRepository {
            record: Mutex::new(ContactMessageRecord {
                id,
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                message: "hi".to_string(),
                is_read: false,
                created_at: now,
                updated_at: now,
            }),
        }
    }

    #[tokio::test]
    async fn mark_read_sets_flag() {
        // Arrange
        let id = Uuid::new_v4();
        let service = MarkMessageReadService::new(repository_with(id));

        // Act
        let updated = service.execute(id, true).await.unwrap();

        // Assert
        assert!(updated.is_read);
    }

    #[tokio::test]
    async fn mark_read_twice_is_idempotent() {
        // Arrange
        let id = Uuid::new_v4();
        let service = MarkMessageReadService::new(repository_with(id));

        // Act
        let first = service.execute(id, true).await.unwrap();
        let second = service.execute(id, true).await.unwrap();

        // Assert
        assert!(first.is_read);
        assert!(second.is_read);
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn mark_unread_reverts_flag() {
        // Arrange
        let id = Uuid::new_v4();
        let service = MarkMessageReadService::new(repository_with(id));

        // Act
        service.execute(id, true).await.unwrap();
        let reverted = service.execute(id, false).await.unwrap();

        // Assert
        assert!(!reverted.is_read);
    }

    #[tokio::test]
    async fn unknown_id_maps_to_not_found() {
        // Arrange
        let service = MarkMessageReadService::new(repository_with(Uuid::new_v4()));

        // Act
        let result = service.execute(Uuid::new_v4(), true).await;

        // Assert
        assert!(matches!(result, Err(MarkMessageReadError::MessageNotFound)));
    }
}

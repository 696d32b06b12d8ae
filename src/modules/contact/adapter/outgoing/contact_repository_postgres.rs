use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::contact::application::ports::outgoing::{
    ContactMessageRecord, ContactRepository, ContactRepositoryError, CreateContactMessageData,
};

use super::sea_orm_entity::{ActiveModel, Entity, Model};

#[derive(Debug, Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn insert(
        &self,
        data: CreateContactMessageData,
    ) -> Result<ContactMessageRecord, ContactRepositoryError> {
        let model = Model::from_create_data(&data);
        let active = model.into_active_model();

        let inserted: Model = active
            .insert(&*self.db)
            .await
            .map_err(|e| ContactRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_record())
    }

    async fn set_read(
        &self,
        id: Uuid,
        is_read: bool,
    ) -> Result<ContactMessageRecord, ContactRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| ContactRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ContactRepositoryError::MessageNotFound)?;

        let mut active: ActiveModel = existing.into();
        active.is_read = Set(is_read);
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ContactRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| ContactRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ContactRepositoryError::MessageNotFound);
        }

        Ok(())
    }
}

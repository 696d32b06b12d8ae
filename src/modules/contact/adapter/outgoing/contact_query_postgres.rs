use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::contact::application::ports::outgoing::{
    ContactMessageRecord, ContactQuery, ContactQueryError,
};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct ContactQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactQuery for ContactQueryPostgres {
    async fn list(&self) -> Result<Vec<ContactMessageRecord>, ContactQueryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ContactQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_record()).collect())
    }
}

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceQueryError, ExperienceRecord,
};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct ExperienceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceQueryPostgres {
    async fn list(&self) -> Result<Vec<ExperienceRecord>, ExperienceQueryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ExperienceQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_record()).collect())
    }
}

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::achievement::application::ports::outgoing::{
    AchievementQuery, AchievementQueryError, AchievementRecord,
};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct AchievementQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AchievementQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AchievementQuery for AchievementQueryPostgres {
    async fn list(&self) -> Result<Vec<AchievementRecord>, AchievementQueryError> {
        let models = Entity::find()
            .order_by_desc(Column::Featured)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| AchievementQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_record()).collect())
    }
}

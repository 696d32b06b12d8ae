use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectRecord,
};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectQueryError> {
        let models = Entity::find()
            .order_by_desc(Column::Featured)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_record()).collect())
    }
}

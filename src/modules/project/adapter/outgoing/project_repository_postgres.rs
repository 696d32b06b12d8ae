use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::project::application::ports::outgoing::{
    CreateProjectData, ProjectRecord, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};

use super::sea_orm_entity::{ActiveModel, Entity, Model};

#[derive(Debug, Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn insert(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let model = Model::from_create_data(&data);
        let active = model.into_active_model();

        let inserted: Model = active
            .insert(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_record())
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ProjectRepositoryError::ProjectNotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(title) = data.title {
            active.title = Set(title);
        }
        if let Some(description) = data.description {
            active.description = Set(description);
        }
        if let Some(tech) = data.tech {
            active.tech = Set(serde_json::to_value(&tech).unwrap_or_default());
        }
        if let Some(github) = data.github {
            active.github = Set(github);
        }
        if let Some(live) = data.live {
            active.live = Set(live);
        }
        if let Some(featured) = data.featured {
            active.featured = Set(featured);
        }
        if let Some(project_type) = data.project_type {
            active.project_type = Set(project_type);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::ProjectNotFound);
        }

        Ok(())
    }
}

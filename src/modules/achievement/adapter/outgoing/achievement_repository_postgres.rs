use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::achievement::application::ports::outgoing::{
    AchievementRecord, AchievementRepository, AchievementRepositoryError, CreateAchievementData,
    UpdateAchievementData,
};

use super::sea_orm_entity::{ActiveModel, Entity, Model};

#[derive(Debug, Clone)]
pub struct AchievementRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AchievementRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AchievementRepository for AchievementRepositoryPostgres {
    async fn insert(
        &self,
        data: CreateAchievementData,
    ) -> Result<AchievementRecord, AchievementRepositoryError> {
        let model = Model::from_create_data(&data);
        let active = model.into_active_model();

        let inserted: Model = active
            .insert(&*self.db)
            .await
            .map_err(|e| AchievementRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_record())
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateAchievementData,
    ) -> Result<AchievementRecord, AchievementRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| AchievementRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AchievementRepositoryError::AchievementNotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(title) = data.title {
            active.title = Set(title);
        }
        if let Some(issuer) = data.issuer {
            active.issuer = Set(issuer);
        }
        if let Some(category) = data.category {
            active.category = Set(category.as_str().to_string());
        }
        if let Some(date) = data.date {
            active.date = Set(date);
        }
        if let Some(image_url) = data.image_url {
            active.image_url = Set(image_url);
        }
        if let Some(proof_url) = data.proof_url {
            active.proof_url = Set(proof_url);
        }
        if let Some(featured) = data.featured {
            active.featured = Set(featured);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| AchievementRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AchievementRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| AchievementRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(AchievementRepositoryError::AchievementNotFound);
        }

        Ok(())
    }
}

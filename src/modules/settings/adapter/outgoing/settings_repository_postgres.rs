use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use std::sync::Arc;
use tracing::info;

use crate::settings::application::ports::outgoing::{
    SettingsRecord, SettingsRepository, SettingsRepositoryError, UpdateSettingsData,
};

use super::sea_orm_entity::{ActiveModel, Entity, Model};

#[derive(Debug, Clone)]
pub struct SettingsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SettingsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_singleton(&self) -> Result<Option<Model>, SettingsRepositoryError> {
        Entity::find()
            .one(&*self.db)
            .await
            .map_err(|e| SettingsRepositoryError::DatabaseError(e.to_string()))
    }

    async fn insert_default(&self) -> Result<Model, SettingsRepositoryError> {
        Model::default_document()
            .into_active_model()
            .insert(&*self.db)
            .await
            .map_err(|e| SettingsRepositoryError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryPostgres {
    async fn get_or_create_default(&self) -> Result<SettingsRecord, SettingsRepositoryError> {
        match self.find_singleton().await? {
            Some(model) => Ok(model.to_record()),
            None => Ok(self.insert_default().await?.to_record()),
        }
    }

    async fn update(
        &self,
        data: UpdateSettingsData,
    ) -> Result<SettingsRecord, SettingsRepositoryError> {
        let existing = match self.find_singleton().await? {
            Some(model) => model,
            None => self.insert_default().await?,
        };

        let mut active: ActiveModel = existing.into();

        if let Some(portfolio_name) = data.portfolio_name {
            active.portfolio_name = Set(portfolio_name);
        }
        if let Some(email) = data.email {
            active.email = Set(email);
        }
        if let Some(phone) = data.phone {
            active.phone = Set(phone);
        }
        if let Some(location) = data.location {
            active.location = Set(location);
        }
        if let Some(github) = data.github {
            active.github = Set(github);
        }
        if let Some(linkedin) = data.linkedin {
            active.linkedin = Set(linkedin);
        }
        if let Some(instagram) = data.instagram {
            active.instagram = Set(instagram);
        }
        if let Some(blog) = data.blog {
            active.blog = Set(blog);
        }
        if let Some(logo) = data.logo {
            active.logo = Set(logo);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| SettingsRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_record())
    }

    async fn ensure_default(&self) -> Result<(), SettingsRepositoryError> {
        if self.find_singleton().await?.is_none() {
            self.insert_default().await?;
            info!("Seeded default settings document");
        }

        Ok(())
    }
}

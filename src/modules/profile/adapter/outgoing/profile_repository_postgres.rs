use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use std::sync::Arc;
use tracing::info;

use crate::profile::application::{
    domain::entities::{ProfileLinks, ProfileStats},
    ports::outgoing::{
        ProfileRecord, ProfileRepository, ProfileRepositoryError, UpdateProfileData,
    },
};

use super::sea_orm_entity::{ActiveModel, Entity, Model};

#[derive(Debug, Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_singleton(&self) -> Result<Option<Model>, ProfileRepositoryError> {
        Entity::find()
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))
    }

    async fn insert_default(&self) -> Result<Model, ProfileRepositoryError> {
        Model::default_document()
            .into_active_model()
            .insert(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn get_or_create_default(&self) -> Result<ProfileRecord, ProfileRepositoryError> {
        match self.find_singleton().await? {
            Some(model) => Ok(model.to_record()),
            None => Ok(self.insert_default().await?.to_record()),
        }
    }

    async fn update(
        &self,
        data: UpdateProfileData,
    ) -> Result<ProfileRecord, ProfileRepositoryError> {
        let existing = match self.find_singleton().await? {
            Some(model) => model,
            None => self.insert_default().await?,
        };

        // Nested objects merge field-wise against the stored state
        let mut stats: ProfileStats =
            serde_json::from_value(existing.stats.clone()).unwrap_or_default();
        let mut links: ProfileLinks =
            serde_json::from_value(existing.links.clone()).unwrap_or_default();

        let mut active: ActiveModel = existing.into();

        if let Some(name) = data.name {
            active.name = Set(name);
        }
        if let Some(title) = data.title {
            active.title = Set(title);
        }
        if let Some(intro) = data.intro {
            active.intro = Set(intro);
        }
        if let Some(skills) = data.skills {
            active.skills = Set(serde_json::to_value(&skills).unwrap_or_default());
        }
        if let Some(profile_image) = data.profile_image {
            active.profile_image = Set(profile_image);
        }
        if let Some(resume_pdf) = data.resume_pdf {
            active.resume_pdf = Set(resume_pdf);
        }
        if let Some(show_badge) = data.show_badge {
            active.show_badge = Set(show_badge);
        }
        if let Some(badge_text) = data.badge_text {
            active.badge_text = Set(badge_text);
        }
        if let Some(patch) = data.stats {
            if let Some(projects) = patch.projects {
                stats.projects = projects;
            }
            if let Some(internships) = patch.internships {
                stats.internships = internships;
            }
            if let Some(open_source) = patch.open_source {
                stats.open_source = open_source;
            }
            active.stats = Set(serde_json::to_value(&stats).unwrap_or_default());
        }
        if let Some(patch) = data.links {
            if let Some(github) = patch.github {
                links.github = github;
            }
            if let Some(linkedin) = patch.linkedin {
                links.linkedin = linkedin;
            }
            active.links = Set(serde_json::to_value(&links).unwrap_or_default());
        }
        if let Some(services) = data.services {
            active.services = Set(serde_json::to_value(&services).unwrap_or_default());
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_record())
    }

    async fn ensure_default(&self) -> Result<(), ProfileRepositoryError> {
        if self.find_singleton().await?.is_none() {
            self.insert_default().await?;
            info!("Seeded default profile document");
        }

        Ok(())
    }
}

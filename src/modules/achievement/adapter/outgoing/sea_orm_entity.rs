use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::achievement::application::{
    domain::entities::AchievementCategory,
    ports::outgoing::{AchievementRecord, CreateAchievementData},
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "achievements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub title: String,

    pub issuer: String,

    // One of the closed category names; validated before it gets here
    pub category: String,

    pub date: String,

    pub image_url: String,

    pub proof_url: String,

    pub featured: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> AchievementRecord {
        AchievementRecord {
            id: self.id,
            title: self.title.clone(),
            issuer: self.issuer.clone(),
            category: AchievementCategory::parse(&self.category).unwrap_or_default(),
            date: self.date.clone(),
            image_url: self.image_url.clone(),
            proof_url: self.proof_url.clone(),
            featured: self.featured,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }

    pub fn from_create_data(data: &CreateAchievementData) -> Self {
        let now = chrono::Utc::now();

        Self {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            issuer: data.issuer.clone(),
            category: data.category.as_str().to_string(),
            date: data.date.clone(),
            image_url: data.image_url.clone(),
            proof_url: data.proof_url.clone(),
            featured: data.featured,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

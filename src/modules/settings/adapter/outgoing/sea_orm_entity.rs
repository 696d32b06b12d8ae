use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::settings::application::ports::outgoing::SettingsRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub portfolio_name: String,

    pub email: String,

    pub phone: String,

    pub location: String,

    pub github: String,

    pub linkedin: String,

    pub instagram: String,

    pub blog: String,

    pub logo: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> SettingsRecord {
        SettingsRecord {
            id: self.id,
            portfolio_name: self.portfolio_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            github: self.github.clone(),
            linkedin: self.linkedin.clone(),
            instagram: self.instagram.clone(),
            blog: self.blog.clone(),
            logo: self.logo.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }

    /// The document a fresh install starts with; everything blank.
    pub fn default_document() -> Self {
        let now = chrono::Utc::now();

        Self {
            id: Uuid::new_v4(),
            portfolio_name: "".to_string(),
            email: "".to_string(),
            phone: "".to_string(),
            location: "".to_string(),
            github: "".to_string(),
            linkedin: "".to_string(),
            instagram: "".to_string(),
            blog: "".to_string(),
            logo: "".to_string(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

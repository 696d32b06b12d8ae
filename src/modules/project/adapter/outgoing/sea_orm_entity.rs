use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::project::application::ports::outgoing::{CreateProjectData, ProjectRecord};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub tech: JsonValue,

    pub github: String,

    pub live: String,

    pub featured: bool,

    pub project_type: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> ProjectRecord {
        ProjectRecord {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            tech: serde_json::from_value(self.tech.clone()).unwrap_or_default(),
            github: self.github.clone(),
            live: self.live.clone(),
            featured: self.featured,
            project_type: self.project_type.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }

    pub fn from_create_data(data: &CreateProjectData) -> Self {
        let now = chrono::Utc::now();

        Self {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            description: data.description.clone(),
            tech: serde_json::to_value(&data.tech).unwrap_or_default(),
            github: data.github.clone(),
            live: data.live.clone(),
            featured: data.featured,
            project_type: data.project_type.clone(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

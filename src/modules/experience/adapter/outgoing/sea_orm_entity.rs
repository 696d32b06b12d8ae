use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::experience::application::ports::outgoing::{CreateExperienceData, ExperienceRecord};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub role: String,

    pub company: String,

    pub experience_type: String,

    pub start_date: String,

    pub end_date: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub skills: JsonValue,

    pub certificate_url: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> ExperienceRecord {
        ExperienceRecord {
            id: self.id,
            role: self.role.clone(),
            company: self.company.clone(),
            experience_type: self.experience_type.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            description: self.description.clone(),
            skills: serde_json::from_value(self.skills.clone()).unwrap_or_default(),
            certificate_url: self.certificate_url.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }

    pub fn from_create_data(data: &CreateExperienceData) -> Self {
        let now = chrono::Utc::now();

        Self {
            id: Uuid::new_v4(),
            role: data.role.clone(),
            company: data.company.clone(),
            experience_type: data.experience_type.clone(),
            start_date: data.start_date.clone(),
            end_date: data.end_date.clone(),
            description: data.description.clone(),
            skills: serde_json::to_value(&data.skills).unwrap_or_default(),
            certificate_url: data.certificate_url.clone(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::profile::application::{
    domain::entities::{ProfileLinks, ProfileStats, ServiceCard},
    ports::outgoing::ProfileRecord,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub name: String,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub intro: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub skills: JsonValue,

    pub profile_image: String,

    pub resume_pdf: String,

    pub show_badge: bool,

    pub badge_text: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub stats: JsonValue,

    #[sea_orm(column_type = "JsonBinary")]
    pub links: JsonValue,

    #[sea_orm(column_type = "JsonBinary")]
    pub services: JsonValue,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> ProfileRecord {
        ProfileRecord {
            id: self.id,
            name: self.name.clone(),
            title: self.title.clone(),
            intro: self.intro.clone(),
            skills: serde_json::from_value(self.skills.clone()).unwrap_or_default(),
            profile_image: self.profile_image.clone(),
            resume_pdf: self.resume_pdf.clone(),
            show_badge: self.show_badge,
            badge_text: self.badge_text.clone(),
            stats: serde_json::from_value(self.stats.clone()).unwrap_or_default(),
            links: serde_json::from_value(self.links.clone()).unwrap_or_default(),
            services: serde_json::from_value(self.services.clone()).unwrap_or_default(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }

    /// The document a fresh install starts with.
    pub fn default_document() -> Self {
        let now = chrono::Utc::now();

        let stats = ProfileStats {
            projects: "10+".to_string(),
            internships: "2".to_string(),
            open_source: "Active".to_string(),
        };

        let links = ProfileLinks {
            github: "https://github.com/".to_string(),
            linkedin: "".to_string(),
        };

        let services = vec![
            ServiceCard {
                title: "Web Development".to_string(),
                desc: "Responsive, fast websites built end to end".to_string(),
            },
            ServiceCard {
                title: "API Development".to_string(),
                desc: "REST backends with clean, documented contracts".to_string(),
            },
            ServiceCard {
                title: "UI Implementation".to_string(),
                desc: "Pixel-accurate builds from your designs".to_string(),
            },
        ];

        Self {
            id: Uuid::new_v4(),
            name: "".to_string(),
            title: "Full Stack Developer".to_string(),
            intro: "".to_string(),
            skills: serde_json::json!([]),
            profile_image: "".to_string(),
            resume_pdf: "".to_string(),
            show_badge: true,
            badge_text: "Available for Freelance Projects".to_string(),
            stats: serde_json::to_value(&stats).unwrap_or_default(),
            links: serde_json::to_value(&links).unwrap_or_default(),
            services: serde_json::to_value(&services).unwrap_or_default(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

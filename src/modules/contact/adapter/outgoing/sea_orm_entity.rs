use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contact::application::ports::outgoing::{
    ContactMessageRecord, CreateContactMessageData,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub name: String,

    pub email: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    pub is_read: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> ContactMessageRecord {
        ContactMessageRecord {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            is_read: self.is_read,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }

    pub fn from_create_data(data: &CreateContactMessageData) -> Self {
        let now = chrono::Utc::now();

        Self {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.clone(),
            message: data.message.clone(),
            is_read: false,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

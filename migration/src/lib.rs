pub use sea_orm_migration::prelude::*;

mod m20260712_101500_create_table_profiles;
mod m20260712_101630_create_table_projects;
mod m20260712_101745_create_table_experiences;
mod m20260712_101900_create_table_achievements;
mod m20260712_102015_create_table_settings;
mod m20260712_102130_create_table_contact_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_101500_create_table_profiles::Migration),
            Box::new(m20260712_101630_create_table_projects::Migration),
            Box::new(m20260712_101745_create_table_experiences::Migration),
            Box::new(m20260712_101900_create_table_achievements::Migration),
            Box::new(m20260712_102015_create_table_settings::Migration),
            Box::new(m20260712_102130_create_table_contact_messages::Migration),
        ]
    }
}

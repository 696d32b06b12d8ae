mod achievement_query_postgres;
mod achievement_repository_postgres;
pub mod sea_orm_entity;

pub use achievement_query_postgres::AchievementQueryPostgres;
pub use achievement_repository_postgres::AchievementRepositoryPostgres;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::experience::application::ports::outgoing::{
    CreateExperienceData, ExperienceRecord, ExperienceRepository, ExperienceRepositoryError,
    UpdateExperienceData,
};

use super::sea_orm_entity::{ActiveModel, Entity, Model};

#[derive(Debug, Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn insert(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let model = Model::from_create_data(&data);
        let active = model.into_active_model();

        let inserted: Model = active
            .insert(&*self.db)
            .await
            .map_err(|e| ExperienceRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_record())
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| ExperienceRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ExperienceRepositoryError::ExperienceNotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(role) = data.role {
            active.role = Set(role);
        }
        if let Some(company) = data.company {
            active.company = Set(company);
        }
        if let Some(experience_type) = data.experience_type {
            active.experience_type = Set(experience_type);
        }
        if let Some(start_date) = data.start_date {
            active.start_date = Set(start_date);
        }
        if let Some(end_date) = data.end_date {
            active.end_date = Set(end_date);
        }
        if let Some(description) = data.description {
            active.description = Set(description);
        }
        if let Some(skills) = data.skills {
            active.skills = Set(serde_json::to_value(&skills).unwrap_or_default());
        }
        if let Some(certificate_url) = data.certificate_url {
            active.certificate_url = Set(certificate_url);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ExperienceRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| ExperienceRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::ExperienceNotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn sample_model(id: Uuid) -> Model {
        let now = chrono::Utc::now().fixed_offset();

        Model {
            id,
            role: "Backend Intern".to_string(),
            company: "Acme".to_string(),
            experience_type: "Internship".to_string(),
            start_date: "2025-06".to_string(),
            end_date: "".to_string(),
            description: "".to_string(),
            skills: serde_json::json!(["Rust"]),
            certificate_url: "".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn insert_maps_skills_json_to_vec() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(id)]])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));

        let record = repo
            .insert(CreateExperienceData {
                role: "Backend Intern".to_string(),
                company: "Acme".to_string(),
                experience_type: "Internship".to_string(),
                start_date: "2025-06".to_string(),
                end_date: "".to_string(),
                description: "".to_string(),
                skills: vec!["Rust".to_string()],
                certificate_url: "".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.skills, vec!["Rust"]);
    }

    #[tokio::test]
    async fn update_on_missing_entry_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .update(Uuid::new_v4(), UpdateExperienceData::default())
            .await;

        assert!(matches!(
            result,
            Err(ExperienceRepositoryError::ExperienceNotFound)
        ));
    }

    #[tokio::test]
    async fn delete_missing_entry_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));

        let result = repo.delete(Uuid::new_v4()).await;

        assert!(matches!(
            result,
            Err(ExperienceRepositoryError::ExperienceNotFound)
        ));
    }
}

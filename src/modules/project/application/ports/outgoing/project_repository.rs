use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// Input DTO for persisting a new project
#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub github: String,
    pub live: String,
    pub featured: bool,
    pub project_type: String,
}

/// Merge payload; fields left `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tech: Option<Vec<String>>,
    pub github: Option<String>,
    pub live: Option<String>,
    pub featured: Option<bool>,
    pub project_type: Option<String>,
}

// Canonical view of a stored project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub tech: Vec<String>,
    pub github: String,
    pub live: String,
    pub featured: bool,
    #[serde(rename = "type")]
    pub project_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Project not found")]
    ProjectNotFound,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn insert(&self, data: CreateProjectData)
        -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;
}

use async_trait::async_trait;

use super::project_repository::ProjectRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// All projects, featured first, then most recent first.
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectQueryError>;
}

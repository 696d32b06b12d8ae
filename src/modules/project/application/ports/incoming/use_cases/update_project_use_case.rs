use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::ports::outgoing::{ProjectRecord, UpdateProjectData};

//
// ──────────────────────────────────────────────────────────
// Update Project Command
// ──────────────────────────────────────────────────────────
//

/// Merge-update: only supplied fields overwrite the stored document.
#[derive(Debug, Clone)]
pub struct UpdateProjectCommand {
    id: Uuid,
    data: UpdateProjectData,
}

impl UpdateProjectCommand {
    pub fn new(id: Uuid, mut data: UpdateProjectData) -> Self {
        data.project_type = data.project_type.map(|t| t.trim().to_string());

        Self { id, data }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn into_data(self) -> UpdateProjectData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProjectCommand)
        -> Result<ProjectRecord, UpdateProjectError>;
}

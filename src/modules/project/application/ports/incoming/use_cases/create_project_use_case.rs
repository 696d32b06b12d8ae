use async_trait::async_trait;

use crate::project::application::ports::outgoing::{CreateProjectData, ProjectRecord};

//
// ──────────────────────────────────────────────────────────
// Create Project Command
// ──────────────────────────────────────────────────────────
//

pub const DEFAULT_PROJECT_TYPE: &str = "General";

#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    title: String,
    description: String,
    tech: Vec<String>,
    github: String,
    live: String,
    featured: bool,
    project_type: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateProjectCommandError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Description is required")]
    DescriptionRequired,
}

impl CreateProjectCommand {
    pub fn new(
        title: String,
        description: String,
        tech: Option<Vec<String>>,
        github: Option<String>,
        live: Option<String>,
        featured: Option<bool>,
        project_type: Option<String>,
    ) -> Result<Self, CreateProjectCommandError> {
        if title.trim().is_empty() {
            return Err(CreateProjectCommandError::TitleRequired);
        }

        if description.trim().is_empty() {
            return Err(CreateProjectCommandError::DescriptionRequired);
        }

        // Category is open free text; blank collapses to the default
        let project_type = project_type
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_PROJECT_TYPE.to_string());

        Ok(Self {
            title,
            description,
            tech: tech.unwrap_or_default(),
            github: github.unwrap_or_default(),
            live: live.unwrap_or_default(),
            featured: featured.unwrap_or(false),
            project_type,
        })
    }

    pub fn into_data(self) -> CreateProjectData {
        CreateProjectData {
            title: self.title,
            description: self.description,
            tech: self.tech,
            github: self.github,
            live: self.live,
            featured: self.featured,
            project_type: self.project_type,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, command: CreateProjectCommand)
        -> Result<ProjectRecord, CreateProjectError>;
}

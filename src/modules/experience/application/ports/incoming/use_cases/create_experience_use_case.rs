use async_trait::async_trait;

use crate::experience::application::ports::outgoing::{CreateExperienceData, ExperienceRecord};

//
// ──────────────────────────────────────────────────────────
// Create Experience Command
// ──────────────────────────────────────────────────────────
//

pub const DEFAULT_EXPERIENCE_TYPE: &str = "Internship";

#[derive(Debug, Clone)]
pub struct CreateExperienceCommand {
    role: String,
    company: String,
    experience_type: String,
    start_date: String,
    end_date: String,
    description: String,
    skills: Vec<String>,
    certificate_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateExperienceCommandError {
    #[error("Role is required")]
    RoleRequired,

    #[error("Company is required")]
    CompanyRequired,
}

impl CreateExperienceCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        role: String,
        company: String,
        experience_type: Option<String>,
        start_date: Option<String>,
        end_date: Option<String>,
        description: Option<String>,
        skills: Option<Vec<String>>,
        certificate_url: Option<String>,
    ) -> Result<Self, CreateExperienceCommandError> {
        if role.trim().is_empty() {
            return Err(CreateExperienceCommandError::RoleRequired);
        }

        if company.trim().is_empty() {
            return Err(CreateExperienceCommandError::CompanyRequired);
        }

        let experience_type = experience_type
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_EXPERIENCE_TYPE.to_string());

        Ok(Self {
            role,
            company,
            experience_type,
            start_date: start_date.unwrap_or_default(),
            end_date: end_date.unwrap_or_default(),
            description: description.unwrap_or_default(),
            skills: skills.unwrap_or_default(),
            certificate_url: certificate_url.unwrap_or_default(),
        })
    }

    pub fn into_data(self) -> CreateExperienceData {
        CreateExperienceData {
            role: self.role,
            company: self.company,
            experience_type: self.experience_type,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            skills: self.skills,
            certificate_url: self.certificate_url,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateExperienceError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateExperienceCommand,
    ) -> Result<ExperienceRecord, CreateExperienceError>;
}

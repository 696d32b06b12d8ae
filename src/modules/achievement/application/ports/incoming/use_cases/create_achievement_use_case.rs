use async_trait::async_trait;

use crate::achievement::application::{
    domain::entities::AchievementCategory,
    ports::outgoing::{AchievementRecord, CreateAchievementData},
};

//
// ──────────────────────────────────────────────────────────
// Create Achievement Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateAchievementCommand {
    title: String,
    issuer: String,
    category: AchievementCategory,
    date: String,
    image_url: String,
    proof_url: String,
    featured: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateAchievementCommandError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Invalid category: {0}")]
    InvalidCategory(String),
}

impl CreateAchievementCommand {
    pub fn new(
        title: String,
        issuer: Option<String>,
        category: Option<String>,
        date: Option<String>,
        image_url: Option<String>,
        proof_url: Option<String>,
        featured: Option<bool>,
    ) -> Result<Self, CreateAchievementCommandError> {
        if title.trim().is_empty() {
            return Err(CreateAchievementCommandError::TitleRequired);
        }

        let category = match category {
            Some(value) => AchievementCategory::parse(&value)
                .ok_or(CreateAchievementCommandError::InvalidCategory(value))?,
            None => AchievementCategory::default(),
        };

        Ok(Self {
            title,
            issuer: issuer.unwrap_or_default(),
            category,
            date: date.unwrap_or_default(),
            image_url: image_url.unwrap_or_default(),
            proof_url: proof_url.unwrap_or_default(),
            featured: featured.unwrap_or(false),
        })
    }

    pub fn into_data(self) -> CreateAchievementData {
        CreateAchievementData {
            title: self.title,
            issuer: self.issuer,
            category: self.category,
            date: self.date,
            image_url: self.image_url,
            proof_url: self.proof_url,
            featured: self.featured,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateAchievementError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateAchievementUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateAchievementCommand,
    ) -> Result<AchievementRecord, CreateAchievementError>;
}

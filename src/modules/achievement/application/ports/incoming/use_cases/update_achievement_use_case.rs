use async_trait::async_trait;
use uuid::Uuid;

use crate::achievement::application::{
    domain::entities::AchievementCategory,
    ports::outgoing::{AchievementRecord, UpdateAchievementData},
};

//
// ──────────────────────────────────────────────────────────
// Update Achievement Command
// ──────────────────────────────────────────────────────────
//

/// Merge-update with the same closed-category check as creation.
#[derive(Debug, Clone)]
pub struct UpdateAchievementCommand {
    id: Uuid,
    data: UpdateAchievementData,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateAchievementCommandError {
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
}

/// Raw update fields as they arrive from the request, category still
/// unvalidated.
#[derive(Debug, Clone, Default)]
pub struct UpdateAchievementFields {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub image_url: Option<String>,
    pub proof_url: Option<String>,
    pub featured: Option<bool>,
}

impl UpdateAchievementCommand {
    pub fn new(
        id: Uuid,
        fields: UpdateAchievementFields,
    ) -> Result<Self, UpdateAchievementCommandError> {
        let category = match fields.category {
            Some(value) => Some(
                AchievementCategory::parse(&value)
                    .ok_or(UpdateAchievementCommandError::InvalidCategory(value))?,
            ),
            None => None,
        };

        Ok(Self {
            id,
            data: UpdateAchievementData {
                title: fields.title,
                issuer: fields.issuer,
                category,
                date: fields.date,
                image_url: fields.image_url,
                proof_url: fields.proof_url,
                featured: fields.featured,
            },
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn into_data(self) -> UpdateAchievementData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateAchievementError {
    #[error("Achievement not found")]
    AchievementNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateAchievementUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateAchievementCommand,
    ) -> Result<AchievementRecord, UpdateAchievementError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_category_is_rejected_before_any_write() {
        let result = UpdateAchievementCommand::new(
            Uuid::new_v4(),
            UpdateAchievementFields {
                category: Some("Bootcamp".to_string()),
                ..Default::default()
            },
        );

        assert!(matches!(
            result,
            Err(UpdateAchievementCommandError::InvalidCategory(_))
        ));
    }

    #[test]
    fn omitted_category_stays_untouched() {
        let command = UpdateAchievementCommand::new(
            Uuid::new_v4(),
            UpdateAchievementFields {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let data = command.into_data();
        assert!(data.category.is_none());
        assert_eq!(data.title.unwrap(), "Renamed");
    }

    #[test]
    fn valid_category_is_parsed() {
        let command = UpdateAchievementCommand::new(
            Uuid::new_v4(),
            UpdateAchievementFields {
                category: Some("Hackathon".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(
            command.into_data().category,
            Some(AchievementCategory::Hackathon)
        );
    }
}

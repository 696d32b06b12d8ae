use async_trait::async_trait;
use uuid::Uuid;

use crate::experience::application::ports::outgoing::{ExperienceRecord, UpdateExperienceData};

/// Merge-update: only supplied fields overwrite the stored document.
#[derive(Debug, Clone)]
pub struct UpdateExperienceCommand {
    id: Uuid,
    data: UpdateExperienceData,
}

impl UpdateExperienceCommand {
    pub fn new(id: Uuid, mut data: UpdateExperienceData) -> Self {
        data.experience_type = data.experience_type.map(|t| t.trim().to_string());

        Self { id, data }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn into_data(self) -> UpdateExperienceData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateExperienceError {
    #[error("Experience not found")]
    ExperienceNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateExperienceCommand,
    ) -> Result<ExperienceRecord, UpdateExperienceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplied_type_is_trimmed() {
        let command = UpdateExperienceCommand::new(
            Uuid::new_v4(),
            UpdateExperienceData {
                experience_type: Some(" Full-time ".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(command.into_data().experience_type.unwrap(), "Full-time");
    }
}

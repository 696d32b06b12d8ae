mod create_experience_use_case;
mod delete_experience_use_case;
mod get_experiences_use_case;
mod update_experience_use_case;

pub use create_experience_use_case::{
    CreateExperienceCommand, CreateExperienceCommandError, CreateExperienceError,
    CreateExperienceUseCase, DEFAULT_EXPERIENCE_TYPE,
};
pub use delete_experience_use_case::{DeleteExperienceError, DeleteExperienceUseCase};
pub use get_experiences_use_case::{GetExperiencesError, GetExperiencesUseCase};
pub use update_experience_use_case::{
    UpdateExperienceCommand, UpdateExperienceError, UpdateExperienceUseCase,
};

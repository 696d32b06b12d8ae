mod create_achievement_use_case;
mod delete_achievement_use_case;
mod get_achievements_use_case;
mod update_achievement_use_case;

pub use create_achievement_use_case::{
    CreateAchievementCommand, CreateAchievementCommandError, CreateAchievementError,
    CreateAchievementUseCase,
};
pub use delete_achievement_use_case::{DeleteAchievementError, DeleteAchievementUseCase};
pub use get_achievements_use_case::{GetAchievementsError, GetAchievementsUseCase};
pub use update_achievement_use_case::{
    UpdateAchievementCommand, UpdateAchievementCommandError, UpdateAchievementError,
    UpdateAchievementFields, UpdateAchievementUseCase,
};

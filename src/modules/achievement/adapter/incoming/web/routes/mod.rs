mod create_achievement;
mod delete_achievement;
mod get_achievements;
mod update_achievement;

pub use create_achievement::{create_achievement_handler, CreateAchievementRequest};
pub use delete_achievement::delete_achievement_handler;
pub use get_achievements::get_achievements_handler;
pub use update_achievement::{update_achievement_handler, UpdateAchievementRequest};

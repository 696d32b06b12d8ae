mod settings_repository;

pub use settings_repository::{
    SettingsRecord, SettingsRepository, SettingsRepositoryError, UpdateSettingsData,
};

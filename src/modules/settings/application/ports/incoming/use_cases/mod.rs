mod get_settings_use_case;
mod update_settings_use_case;

pub use get_settings_use_case::{GetSettingsError, GetSettingsUseCase};
pub use update_settings_use_case::{
    UpdateSettingsCommand, UpdateSettingsError, UpdateSettingsUseCase,
};

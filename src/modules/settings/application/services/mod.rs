mod get_settings_service;
mod update_settings_service;

pub use get_settings_service::GetSettingsService;
pub use update_settings_service::UpdateSettingsService;

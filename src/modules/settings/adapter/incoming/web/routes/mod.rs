mod get_settings;
mod update_settings;
mod upload_logo;

pub use get_settings::get_settings_handler;
pub use update_settings::{update_settings_handler, UpdateSettingsRequest};
pub use upload_logo::upload_logo_handler;

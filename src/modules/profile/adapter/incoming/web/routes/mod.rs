mod get_profile;
mod update_profile;
mod upload_profile_image;
mod upload_profile_resume;

pub use get_profile::get_profile_handler;
pub use update_profile::{update_profile_handler, UpdateProfileRequest};
pub use upload_profile_image::upload_profile_image_handler;
pub use upload_profile_resume::upload_profile_resume_handler;

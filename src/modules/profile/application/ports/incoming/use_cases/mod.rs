mod get_profile_use_case;
mod update_profile_use_case;

pub use get_profile_use_case::{GetProfileError, GetProfileUseCase};
pub use update_profile_use_case::{
    UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
};

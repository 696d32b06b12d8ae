mod profile_repository;

pub use profile_repository::{
    ProfileRecord, ProfileRepository, ProfileRepositoryError, UpdateLinksData, UpdateProfileData,
    UpdateStatsData,
};

//! Benign stand-ins for every port the routes touch. Tests override the one
//! use case they exercise through `TestAppStateBuilder`; everything else
//! falls back to these.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::achievement::application::ports::incoming::use_cases::{
    CreateAchievementCommand, CreateAchievementError, CreateAchievementUseCase,
    DeleteAchievementError, DeleteAchievementUseCase, GetAchievementsError,
    GetAchievementsUseCase, UpdateAchievementCommand, UpdateAchievementError,
    UpdateAchievementUseCase,
};
use crate::achievement::application::ports::outgoing::AchievementRecord;
use crate::admin::application::ports::incoming::use_cases::{
    UnlockAdminCommand, UnlockAdminError, UnlockAdminUseCase,
};
use crate::admin::application::ports::outgoing::token_provider::{
    AdminClaims, TokenError, TokenProvider,
};
use crate::contact::application::ports::incoming::use_cases::{
    DeleteMessageError, DeleteMessageUseCase, GetMessagesError, GetMessagesUseCase,
    MarkMessageReadError, MarkMessageReadUseCase, SubmitMessageCommand, SubmitMessageError,
    SubmitMessageUseCase,
};
use crate::contact::application::ports::outgoing::ContactMessageRecord;
use crate::experience::application::ports::incoming::use_cases::{
    CreateExperienceCommand, CreateExperienceError, CreateExperienceUseCase,
    DeleteExperienceError, DeleteExperienceUseCase, GetExperiencesError, GetExperiencesUseCase,
    UpdateExperienceCommand, UpdateExperienceError, UpdateExperienceUseCase,
};
use crate::experience::application::ports::outgoing::ExperienceRecord;
use crate::profile::application::domain::entities::{ProfileLinks, ProfileStats};
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase, UpdateProfileCommand, UpdateProfileError,
    UpdateProfileUseCase,
};
use crate::profile::application::ports::outgoing::ProfileRecord;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase, DeleteProjectError,
    DeleteProjectUseCase, GetProjectsError, GetProjectsUseCase, UpdateProjectCommand,
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::project::application::ports::outgoing::ProjectRecord;
use crate::settings::application::ports::incoming::use_cases::{
    GetSettingsError, GetSettingsUseCase, UpdateSettingsCommand, UpdateSettingsError,
    UpdateSettingsUseCase,
};
use crate::settings::application::ports::outgoing::SettingsRecord;
use crate::storage::application::domain::entities::{UploadKind, UploadedFile};
use crate::storage::application::ports::outgoing::{FileStore, FileStoreError};

// ============================================================
// Token provider
// ============================================================

/// Trait-accurate TokenProvider stub for route tests behind AdminAccess.
#[derive(Clone)]
pub struct StubTokenProvider {
    verify_result: Result<AdminClaims, TokenError>,
}

impl StubTokenProvider {
    /// Every bearer token verifies as a long-lived admin session.
    pub fn admin() -> Self {
        Self {
            verify_result: Ok(AdminClaims {
                role: "admin".to_string(),
                exp: 9_999_999_999,
                iat: 0,
                nbf: 0,
            }),
        }
    }

    /// Every bearer token is rejected as expired.
    pub fn rejecting() -> Self {
        Self {
            verify_result: Err(TokenError::TokenExpired),
        }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_admin_token(&self) -> Result<String, TokenError> {
        Ok("stub.admin.token".to_string())
    }

    fn verify_token(&self, _token: &str) -> Result<AdminClaims, TokenError> {
        self.verify_result.clone()
    }
}

// ============================================================
// File store
// ============================================================

/// Keeps the original filename so path assertions stay readable; nothing is
/// written to disk.
pub struct StubFileStore;

#[async_trait]
impl FileStore for StubFileStore {
    async fn store(&self, kind: UploadKind, file: &UploadedFile) -> Result<String, FileStoreError> {
        Ok(format!("/uploads/{}/{}", kind.subdir(), file.original_name))
    }
}

// ============================================================
// Sample records
// ============================================================

pub fn stub_profile_record() -> ProfileRecord {
    let now = Utc::now();

    ProfileRecord {
        id: Uuid::new_v4(),
        name: "".to_string(),
        title: "Full Stack Developer".to_string(),
        intro: "".to_string(),
        skills: vec![],
        profile_image: "".to_string(),
        resume_pdf: "".to_string(),
        show_badge: true,
        badge_text: "Available for Freelance Projects".to_string(),
        stats: ProfileStats::default(),
        links: ProfileLinks::default(),
        services: vec![],
        created_at: now,
        updated_at: now,
    }
}

pub fn stub_settings_record() -> SettingsRecord {
    let now = Utc::now();

    SettingsRecord {
        id: Uuid::new_v4(),
        portfolio_name: "".to_string(),
        email: "".to_string(),
        phone: "".to_string(),
        location: "".to_string(),
        github: "".to_string(),
        linkedin: "".to_string(),
        instagram: "".to_string(),
        blog: "".to_string(),
        logo: "".to_string(),
        created_at: now,
        updated_at: now,
    }
}

// ============================================================
// Profile
// ============================================================

pub struct StubGetProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self) -> Result<ProfileRecord, GetProfileError> {
        Ok(stub_profile_record())
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _command: UpdateProfileCommand,
    ) -> Result<ProfileRecord, UpdateProfileError> {
        Err(UpdateProfileError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

// ============================================================
// Projects
// ============================================================

pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<ProjectRecord>, GetProjectsError> {
        Ok(vec![])
    }
}

pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(
        &self,
        _command: CreateProjectCommand,
    ) -> Result<ProjectRecord, CreateProjectError> {
        Err(CreateProjectError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _command: UpdateProjectCommand,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        Err(UpdateProjectError::ProjectNotFound)
    }
}

pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteProjectError> {
        Ok(())
    }
}

// ============================================================
// Experience
// ============================================================

pub struct StubGetExperiencesUseCase;

#[async_trait]
impl GetExperiencesUseCase for StubGetExperiencesUseCase {
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, GetExperiencesError> {
        Ok(vec![])
    }
}

pub struct StubCreateExperienceUseCase;

#[async_trait]
impl CreateExperienceUseCase for StubCreateExperienceUseCase {
    async fn execute(
        &self,
        _command: CreateExperienceCommand,
    ) -> Result<ExperienceRecord, CreateExperienceError> {
        Err(CreateExperienceError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubUpdateExperienceUseCase;

#[async_trait]
impl UpdateExperienceUseCase for StubUpdateExperienceUseCase {
    async fn execute(
        &self,
        _command: UpdateExperienceCommand,
    ) -> Result<ExperienceRecord, UpdateExperienceError> {
        Err(UpdateExperienceError::ExperienceNotFound)
    }
}

pub struct StubDeleteExperienceUseCase;

#[async_trait]
impl DeleteExperienceUseCase for StubDeleteExperienceUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteExperienceError> {
        Ok(())
    }
}

// ============================================================
// Achievements
// ============================================================

pub struct StubGetAchievementsUseCase;

#[async_trait]
impl GetAchievementsUseCase for StubGetAchievementsUseCase {
    async fn execute(&self) -> Result<Vec<AchievementRecord>, GetAchievementsError> {
        Ok(vec![])
    }
}

pub struct StubCreateAchievementUseCase;

#[async_trait]
impl CreateAchievementUseCase for StubCreateAchievementUseCase {
    async fn execute(
        &self,
        _command: CreateAchievementCommand,
    ) -> Result<AchievementRecord, CreateAchievementError> {
        Err(CreateAchievementError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubUpdateAchievementUseCase;

#[async_trait]
impl UpdateAchievementUseCase for StubUpdateAchievementUseCase {
    async fn execute(
        &self,
        _command: UpdateAchievementCommand,
    ) -> Result<AchievementRecord, UpdateAchievementError> {
        Err(UpdateAchievementError::AchievementNotFound)
    }
}

pub struct StubDeleteAchievementUseCase;

#[async_trait]
impl DeleteAchievementUseCase for StubDeleteAchievementUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteAchievementError> {
        Ok(())
    }
}

// ============================================================
// Settings
// ============================================================

pub struct StubGetSettingsUseCase;

#[async_trait]
impl GetSettingsUseCase for StubGetSettingsUseCase {
    async fn execute(&self) -> Result<SettingsRecord, GetSettingsError> {
        Ok(stub_settings_record())
    }
}

pub struct StubUpdateSettingsUseCase;

#[async_trait]
impl UpdateSettingsUseCase for StubUpdateSettingsUseCase {
    async fn execute(
        &self,
        _command: UpdateSettingsCommand,
    ) -> Result<SettingsRecord, UpdateSettingsError> {
        Err(UpdateSettingsError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

// ============================================================
// Contact
// ============================================================

pub struct StubSubmitMessageUseCase;

#[async_trait]
impl SubmitMessageUseCase for StubSubmitMessageUseCase {
    async fn execute(
        &self,
        _command: SubmitMessageCommand,
    ) -> Result<ContactMessageRecord, SubmitMessageError> {
        Err(SubmitMessageError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubGetMessagesUseCase;

#[async_trait]
impl GetMessagesUseCase for StubGetMessagesUseCase {
    async fn execute(&self) -> Result<Vec<ContactMessageRecord>, GetMessagesError> {
        Ok(vec![])
    }
}

pub struct StubMarkMessageReadUseCase;

#[async_trait]
impl MarkMessageReadUseCase for StubMarkMessageReadUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _is_read: bool,
    ) -> Result<ContactMessageRecord, MarkMessageReadError> {
        Err(MarkMessageReadError::MessageNotFound)
    }
}

pub struct StubDeleteMessageUseCase;

#[async_trait]
impl DeleteMessageUseCase for StubDeleteMessageUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteMessageError> {
        Ok(())
    }
}

// ============================================================
// Admin
// ============================================================

pub struct StubUnlockAdminUseCase;

#[async_trait]
impl UnlockAdminUseCase for StubUnlockAdminUseCase {
    async fn execute(&self, _command: UnlockAdminCommand) -> Result<String, UnlockAdminError> {
        Ok("stub.admin.token".to_string())
    }
}

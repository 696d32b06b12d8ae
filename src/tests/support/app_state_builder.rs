use actix_web::web;
use std::sync::Arc;

use crate::achievement::application::ports::incoming::use_cases::{
    CreateAchievementUseCase, DeleteAchievementUseCase, GetAchievementsUseCase,
    UpdateAchievementUseCase,
};
use crate::admin::application::ports::incoming::use_cases::UnlockAdminUseCase;
use crate::contact::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, GetMessagesUseCase, MarkMessageReadUseCase, SubmitMessageUseCase,
};
use crate::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperiencesUseCase,
    UpdateExperienceUseCase,
};
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, UpdateProfileUseCase,
};
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, UpdateProjectUseCase,
};
use crate::settings::application::ports::incoming::use_cases::{
    GetSettingsUseCase, UpdateSettingsUseCase,
};
use crate::storage::application::domain::policies::UploadPolicy;
use crate::storage::application::ports::outgoing::FileStore;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a benign stub; tests swap in
/// a mock for the one route under test.
pub struct TestAppStateBuilder {
    get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    get_projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
    create_project: Arc<dyn CreateProjectUseCase + Send + Sync>,
    update_project: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    delete_project: Arc<dyn DeleteProjectUseCase + Send + Sync>,
    get_experiences: Arc<dyn GetExperiencesUseCase + Send + Sync>,
    create_experience: Arc<dyn CreateExperienceUseCase + Send + Sync>,
    update_experience: Arc<dyn UpdateExperienceUseCase + Send + Sync>,
    delete_experience: Arc<dyn DeleteExperienceUseCase + Send + Sync>,
    get_achievements: Arc<dyn GetAchievementsUseCase + Send + Sync>,
    create_achievement: Arc<dyn CreateAchievementUseCase + Send + Sync>,
    update_achievement: Arc<dyn UpdateAchievementUseCase + Send + Sync>,
    delete_achievement: Arc<dyn DeleteAchievementUseCase + Send + Sync>,
    get_settings: Arc<dyn GetSettingsUseCase + Send + Sync>,
    update_settings: Arc<dyn UpdateSettingsUseCase + Send + Sync>,
    submit_message: Arc<dyn SubmitMessageUseCase + Send + Sync>,
    get_messages: Arc<dyn GetMessagesUseCase + Send + Sync>,
    mark_message_read: Arc<dyn MarkMessageReadUseCase + Send + Sync>,
    delete_message: Arc<dyn DeleteMessageUseCase + Send + Sync>,
    unlock_admin: Arc<dyn UnlockAdminUseCase + Send + Sync>,
    upload_policy: UploadPolicy,
    file_store: Arc<dyn FileStore + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_profile: Arc::new(StubGetProfileUseCase),
            update_profile: Arc::new(StubUpdateProfileUseCase),
            get_projects: Arc::new(StubGetProjectsUseCase),
            create_project: Arc::new(StubCreateProjectUseCase),
            update_project: Arc::new(StubUpdateProjectUseCase),
            delete_project: Arc::new(StubDeleteProjectUseCase),
            get_experiences: Arc::new(StubGetExperiencesUseCase),
            create_experience: Arc::new(StubCreateExperienceUseCase),
            update_experience: Arc::new(StubUpdateExperienceUseCase),
            delete_experience: Arc::new(StubDeleteExperienceUseCase),
            get_achievements: Arc::new(StubGetAchievementsUseCase),
            create_achievement: Arc::new(StubCreateAchievementUseCase),
            update_achievement: Arc::new(StubUpdateAchievementUseCase),
            delete_achievement: Arc::new(StubDeleteAchievementUseCase),
            get_settings: Arc::new(StubGetSettingsUseCase),
            update_settings: Arc::new(StubUpdateSettingsUseCase),
            submit_message: Arc::new(StubSubmitMessageUseCase),
            get_messages: Arc::new(StubGetMessagesUseCase),
            mark_message_read: Arc::new(StubMarkMessageReadUseCase),
            delete_message: Arc::new(StubDeleteMessageUseCase),
            unlock_admin: Arc::new(StubUnlockAdminUseCase),
            upload_policy: UploadPolicy {
                max_file_size_bytes: 5 * 1024 * 1024,
                allowed_image_types: UploadPolicy::DEFAULT_ALLOWED_IMAGE_TYPES,
                allowed_document_types: UploadPolicy::DEFAULT_ALLOWED_DOCUMENT_TYPES,
            },
            file_store: Arc::new(StubFileStore),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + 'static) -> Self {
        self.get_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.update_profile = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + 'static) -> Self {
        self.get_projects = Arc::new(uc);
        self
    }

    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + 'static) -> Self {
        self.create_project = Arc::new(uc);
        self
    }

    pub fn with_update_project(mut self, uc: impl UpdateProjectUseCase + 'static) -> Self {
        self.update_project = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl DeleteProjectUseCase + 'static) -> Self {
        self.delete_project = Arc::new(uc);
        self
    }

    pub fn with_get_experiences(mut self, uc: impl GetExperiencesUseCase + 'static) -> Self {
        self.get_experiences = Arc::new(uc);
        self
    }

    pub fn with_create_experience(mut self, uc: impl CreateExperienceUseCase + 'static) -> Self {
        self.create_experience = Arc::new(uc);
        self
    }

    pub fn with_update_experience(mut self, uc: impl UpdateExperienceUseCase + 'static) -> Self {
        self.update_experience = Arc::new(uc);
        self
    }

    pub fn with_delete_experience(mut self, uc: impl DeleteExperienceUseCase + 'static) -> Self {
        self.delete_experience = Arc::new(uc);
        self
    }

    pub fn with_get_achievements(mut self, uc: impl GetAchievementsUseCase + 'static) -> Self {
        self.get_achievements = Arc::new(uc);
        self
    }

    pub fn with_create_achievement(
        mut self,
        uc: impl CreateAchievementUseCase + 'static,
    ) -> Self {
        self.create_achievement = Arc::new(uc);
        self
    }

    pub fn with_update_achievement(
        mut self,
        uc: impl UpdateAchievementUseCase + 'static,
    ) -> Self {
        self.update_achievement = Arc::new(uc);
        self
    }

    pub fn with_delete_achievement(
        mut self,
        uc: impl DeleteAchievementUseCase + 'static,
    ) -> Self {
        self.delete_achievement = Arc::new(uc);
        self
    }

    pub fn with_get_settings(mut self, uc: impl GetSettingsUseCase + 'static) -> Self {
        self.get_settings = Arc::new(uc);
        self
    }

    pub fn with_update_settings(mut self, uc: impl UpdateSettingsUseCase + 'static) -> Self {
        self.update_settings = Arc::new(uc);
        self
    }

    pub fn with_submit_message(mut self, uc: impl SubmitMessageUseCase + 'static) -> Self {
        self.submit_message = Arc::new(uc);
        self
    }

    pub fn with_get_messages(mut self, uc: impl GetMessagesUseCase + 'static) -> Self {
        self.get_messages = Arc::new(uc);
        self
    }

    pub fn with_mark_message_read(mut self, uc: impl MarkMessageReadUseCase + 'static) -> Self {
        self.mark_message_read = Arc::new(uc);
        self
    }

    pub fn with_delete_message(mut self, uc: impl DeleteMessageUseCase + 'static) -> Self {
        self.delete_message = Arc::new(uc);
        self
    }

    pub fn with_unlock_admin(mut self, uc: impl UnlockAdminUseCase + 'static) -> Self {
        self.unlock_admin = Arc::new(uc);
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn with_file_store(mut self, store: impl FileStore + 'static) -> Self {
        self.file_store = Arc::new(store);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            get_profile_use_case: self.get_profile,
            update_profile_use_case: self.update_profile,
            get_projects_use_case: self.get_projects,
            create_project_use_case: self.create_project,
            update_project_use_case: self.update_project,
            delete_project_use_case: self.delete_project,
            get_experiences_use_case: self.get_experiences,
            create_experience_use_case: self.create_experience,
            update_experience_use_case: self.update_experience,
            delete_experience_use_case: self.delete_experience,
            get_achievements_use_case: self.get_achievements,
            create_achievement_use_case: self.create_achievement,
            update_achievement_use_case: self.update_achievement,
            delete_achievement_use_case: self.delete_achievement,
            get_settings_use_case: self.get_settings,
            update_settings_use_case: self.update_settings,
            submit_message_use_case: self.submit_message,
            get_messages_use_case: self.get_messages,
            mark_message_read_use_case: self.mark_message_read,
            delete_message_use_case: self.delete_message,
            unlock_admin_use_case: self.unlock_admin,
            upload_policy: self.upload_policy,
            file_store: self.file_store,
        })
    }
}

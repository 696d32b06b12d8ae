pub mod modules;
pub use modules::achievement;
pub use modules::admin;
pub use modules::contact;
pub use modules::email;
pub use modules::experience;
pub use modules::profile;
pub use modules::project;
pub use modules::settings;
pub use modules::storage;
pub mod api;
pub mod health;
pub mod shared;

use crate::admin::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::admin::application::ports::incoming::use_cases::UnlockAdminUseCase;
use crate::admin::application::ports::outgoing::token_provider::TokenProvider;
use crate::admin::application::services::UnlockAdminService;

use crate::achievement::adapter::outgoing::{
    AchievementQueryPostgres, AchievementRepositoryPostgres,
};
use crate::achievement::application::ports::incoming::use_cases::{
    CreateAchievementUseCase, DeleteAchievementUseCase, GetAchievementsUseCase,
    UpdateAchievementUseCase,
};
use crate::achievement::application::services::{
    CreateAchievementService, DeleteAchievementService, GetAchievementsService,
    UpdateAchievementService,
};

use crate::contact::adapter::outgoing::{ContactQueryPostgres, ContactRepositoryPostgres};
use crate::contact::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, GetMessagesUseCase, MarkMessageReadUseCase, SubmitMessageUseCase,
};
use crate::contact::application::ports::outgoing::ContactNotifier;
use crate::contact::application::services::{
    DeleteMessageService, GetMessagesService, MarkMessageReadService, SubmitMessageService,
};

use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::services::ContactEmailService;

use crate::experience::adapter::outgoing::{ExperienceQueryPostgres, ExperienceRepositoryPostgres};
use crate::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperiencesUseCase,
    UpdateExperienceUseCase,
};
use crate::experience::application::services::{
    CreateExperienceService, DeleteExperienceService, GetExperiencesService,
    UpdateExperienceService,
};

use crate::profile::adapter::outgoing::ProfileRepositoryPostgres;
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, UpdateProfileUseCase,
};
use crate::profile::application::ports::outgoing::ProfileRepository;
use crate::profile::application::services::{GetProfileService, UpdateProfileService};

use crate::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, UpdateProjectUseCase,
};
use crate::project::application::services::{
    CreateProjectService, DeleteProjectService, GetProjectsService, UpdateProjectService,
};

use crate::settings::adapter::outgoing::SettingsRepositoryPostgres;
use crate::settings::application::ports::incoming::use_cases::{
    GetSettingsUseCase, UpdateSettingsUseCase,
};
use crate::settings::application::ports::outgoing::SettingsRepository;
use crate::settings::application::services::{GetSettingsService, UpdateSettingsService};

use crate::storage::adapter::outgoing::LocalDiskStore;
use crate::storage::application::domain::policies::UploadPolicy;
use crate::storage::application::ports::outgoing::FileStore;

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    // profile
    pub get_profile_use_case: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub update_profile_use_case: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    // projects
    pub get_projects_use_case: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub create_project_use_case: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub update_project_use_case: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete_project_use_case: Arc<dyn DeleteProjectUseCase + Send + Sync>,
    // experience
    pub get_experiences_use_case: Arc<dyn GetExperiencesUseCase + Send + Sync>,
    pub create_experience_use_case: Arc<dyn CreateExperienceUseCase + Send + Sync>,
    pub update_experience_use_case: Arc<dyn UpdateExperienceUseCase + Send + Sync>,
    pub delete_experience_use_case: Arc<dyn DeleteExperienceUseCase + Send + Sync>,
    // achievements
    pub get_achievements_use_case: Arc<dyn GetAchievementsUseCase + Send + Sync>,
    pub create_achievement_use_case: Arc<dyn CreateAchievementUseCase + Send + Sync>,
    pub update_achievement_use_case: Arc<dyn UpdateAchievementUseCase + Send + Sync>,
    pub delete_achievement_use_case: Arc<dyn DeleteAchievementUseCase + Send + Sync>,
    // settings
    pub get_settings_use_case: Arc<dyn GetSettingsUseCase + Send + Sync>,
    pub update_settings_use_case: Arc<dyn UpdateSettingsUseCase + Send + Sync>,
    // contact
    pub submit_message_use_case: Arc<dyn SubmitMessageUseCase + Send + Sync>,
    pub get_messages_use_case: Arc<dyn GetMessagesUseCase + Send + Sync>,
    pub mark_message_read_use_case: Arc<dyn MarkMessageReadUseCase + Send + Sync>,
    pub delete_message_use_case: Arc<dyn DeleteMessageUseCase + Send + Sync>,
    // admin
    pub unlock_admin_use_case: Arc<dyn UnlockAdminUseCase + Send + Sync>,
    // uploads
    pub upload_policy: UploadPolicy,
    pub file_store: Arc<dyn FileStore + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let admin_key = env::var("ADMIN_KEY").expect("ADMIN_KEY is not set in .env file");

    // SMTP SETUPS
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let to_email = env::var("EMAIL_TO").expect("EMAIL_TO not set");
    let smtp_sender = if env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        // Production SMTP
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
    };

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&conn, None)
        .await
        .expect("Failed to run migrations");

    let db_arc = Arc::new(conn);

    // Repositories and queries
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let settings_repo = SettingsRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(&db_arc));
    let experience_query = ExperienceQueryPostgres::new(Arc::clone(&db_arc));
    let achievement_repo = AchievementRepositoryPostgres::new(Arc::clone(&db_arc));
    let achievement_query = AchievementQueryPostgres::new(Arc::clone(&db_arc));
    let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db_arc));
    let contact_query = ContactQueryPostgres::new(Arc::clone(&db_arc));

    // Singleton seeding happens once at startup, not on first read, so two
    // near-simultaneous first requests cannot both create the document
    profile_repo
        .ensure_default()
        .await
        .expect("Failed to seed profile");
    settings_repo
        .ensure_default()
        .await
        .expect("Failed to seed settings");

    // Admin gate
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let unlock_admin_use_case =
        UnlockAdminService::new(admin_key, Arc::new(jwt_service.clone()));

    // Contact notification
    let contact_notifier: Arc<dyn ContactNotifier + Send + Sync> =
        Arc::new(ContactEmailService::new(smtp_sender, to_email));

    // Uploads
    let upload_policy = UploadPolicy::from_env();
    let disk_store = LocalDiskStore::from_env();
    let upload_root = disk_store.root().to_path_buf();
    let file_store: Arc<dyn FileStore + Send + Sync> = Arc::new(disk_store);

    let state = AppState {
        get_profile_use_case: Arc::new(GetProfileService::new(profile_repo.clone())),
        update_profile_use_case: Arc::new(UpdateProfileService::new(profile_repo)),
        get_projects_use_case: Arc::new(GetProjectsService::new(project_query)),
        create_project_use_case: Arc::new(CreateProjectService::new(project_repo.clone())),
        update_project_use_case: Arc::new(UpdateProjectService::new(project_repo.clone())),
        delete_project_use_case: Arc::new(DeleteProjectService::new(project_repo)),
        get_experiences_use_case: Arc::new(GetExperiencesService::new(experience_query)),
        create_experience_use_case: Arc::new(CreateExperienceService::new(
            experience_repo.clone(),
        )),
        update_experience_use_case: Arc::new(UpdateExperienceService::new(
            experience_repo.clone(),
        )),
        delete_experience_use_case: Arc::new(DeleteExperienceService::new(experience_repo)),
        get_achievements_use_case: Arc::new(GetAchievementsService::new(achievement_query)),
        create_achievement_use_case: Arc::new(CreateAchievementService::new(
            achievement_repo.clone(),
        )),
        update_achievement_use_case: Arc::new(UpdateAchievementService::new(
            achievement_repo.clone(),
        )),
        delete_achievement_use_case: Arc::new(DeleteAchievementService::new(achievement_repo)),
        get_settings_use_case: Arc::new(GetSettingsService::new(settings_repo.clone())),
        update_settings_use_case: Arc::new(UpdateSettingsService::new(settings_repo)),
        submit_message_use_case: Arc::new(SubmitMessageService::new(
            contact_repo.clone(),
            Arc::clone(&contact_notifier),
        )),
        get_messages_use_case: Arc::new(GetMessagesService::new(contact_query)),
        mark_message_read_use_case: Arc::new(MarkMessageReadService::new(contact_repo.clone())),
        delete_message_use_case: Arc::new(DeleteMessageService::new(contact_repo)),
        unlock_admin_use_case: Arc::new(unlock_admin_use_case),
        upload_policy,
        file_store,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
            .service(actix_files::Files::new("/uploads", upload_root.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::upload_profile_image_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::upload_profile_resume_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Experience
    cfg.service(crate::experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::delete_experience_handler);
    // Achievements
    cfg.service(crate::achievement::adapter::incoming::web::routes::get_achievements_handler);
    cfg.service(crate::achievement::adapter::incoming::web::routes::create_achievement_handler);
    cfg.service(crate::achievement::adapter::incoming::web::routes::update_achievement_handler);
    cfg.service(crate::achievement::adapter::incoming::web::routes::delete_achievement_handler);
    // Settings
    cfg.service(crate::settings::adapter::incoming::web::routes::get_settings_handler);
    cfg.service(crate::settings::adapter::incoming::web::routes::update_settings_handler);
    cfg.service(crate::settings::adapter::incoming::web::routes::upload_logo_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_message_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::get_messages_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::mark_message_read_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::delete_message_handler);
    // Admin
    cfg.service(crate::admin::adapter::incoming::web::routes::unlock_admin_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}

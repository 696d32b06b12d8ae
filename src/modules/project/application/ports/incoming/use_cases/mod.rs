mod create_project_use_case;
mod delete_project_use_case;
mod get_projects_use_case;
mod update_project_use_case;

pub use create_project_use_case::{
    CreateProjectCommand, CreateProjectCommandError, CreateProjectError, CreateProjectUseCase,
    DEFAULT_PROJECT_TYPE,
};
pub use delete_project_use_case::{DeleteProjectError, DeleteProjectUseCase};
pub use get_projects_use_case::{GetProjectsError, GetProjectsUseCase};
pub use update_project_use_case::{UpdateProjectCommand, UpdateProjectError, UpdateProjectUseCase};

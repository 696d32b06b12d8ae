mod unlock_admin_service;

pub use unlock_admin_service::UnlockAdminService;

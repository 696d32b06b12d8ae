mod unlock_admin;

// Glob re-export keeps the utoipa path metadata reachable for api/openapi.rs
pub use unlock_admin::*;

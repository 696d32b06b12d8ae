mod delete_message;
mod get_messages;
mod mark_message_read;
mod submit_message;

// Glob re-exports keep the utoipa path metadata reachable for api/openapi.rs
pub use delete_message::*;
pub use get_messages::*;
pub use mark_message_read::*;
pub use submit_message::*;

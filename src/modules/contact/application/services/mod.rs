mod delete_message_service;
mod get_messages_service;
mod mark_message_read_service;
mod submit_message_service;

pub use delete_message_service::DeleteMessageService;
pub use get_messages_service::GetMessagesService;
pub use mark_message_read_service::MarkMessageReadService;
pub use submit_message_service::SubmitMessageService;

mod delete_message_use_case;
mod get_messages_use_case;
mod mark_message_read_use_case;
mod submit_message_use_case;

pub use delete_message_use_case::{DeleteMessageError, DeleteMessageUseCase};
pub use get_messages_use_case::{GetMessagesError, GetMessagesUseCase};
pub use mark_message_read_use_case::{MarkMessageReadError, MarkMessageReadUseCase};
pub use submit_message_use_case::{
    SubmitMessageCommand, SubmitMessageCommandError, SubmitMessageError, SubmitMessageUseCase,
};

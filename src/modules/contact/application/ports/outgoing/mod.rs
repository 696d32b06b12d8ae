mod contact_notifier;
mod contact_query;
mod contact_repository;

pub use contact_notifier::{ContactNotificationError, ContactNotifier};
pub use contact_query::{ContactQuery, ContactQueryError};
pub use contact_repository::{
    ContactMessageRecord, ContactRepository, ContactRepositoryError, CreateContactMessageData,
};

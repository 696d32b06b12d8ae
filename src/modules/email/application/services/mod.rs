mod contact_email_service;

pub use contact_email_service::ContactEmailService;

pub mod achievement;
pub mod admin;
pub mod contact;
pub mod email;
pub mod experience;
pub mod profile;
pub mod project;
pub mod settings;
pub mod storage;

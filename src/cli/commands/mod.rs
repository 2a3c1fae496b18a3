pub mod common;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod login;
pub mod prefs;
pub mod status;

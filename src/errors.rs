//! Unified application error type.
//! Every layer (source, db, core, session, export, cli) returns AppError so
//! the dispatcher can print a single consistent message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Record store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Failed to load table '{table}': {message}")]
    Fetch { table: String, message: String },

    #[error("Load error: {0}")]
    Load(String),

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    // ---------------------------
    // Input parsing
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Identity
    // ---------------------------
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not signed in. Run `opsdash login --email <address>` first")]
    NotSignedIn,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn fetch(table: &str, message: impl Into<String>) -> Self {
        AppError::Fetch {
            table: table.to_string(),
            message: message.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

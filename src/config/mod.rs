use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod check;

/// Environment variable that relocates the whole config directory.
pub const HOME_ENV: &str = "OPSDASH_HOME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Sqlite,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub source: SourceKind,
    #[serde(default)]
    pub json_dir: Option<String>,
    #[serde(default)]
    pub admin_email: String,
    #[serde(default = "default_row_limit")]
    pub row_limit: usize,
    #[serde(default = "default_feed_limit")]
    pub feed_limit: usize,
    #[serde(default = "default_range")]
    pub default_range: String,
    #[serde(default)]
    pub export_dir: Option<String>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_row_limit() -> usize {
    500
}
fn default_feed_limit() -> usize {
    50
}
fn default_range() -> String {
    "7d".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            source: SourceKind::default(),
            json_dir: None,
            admin_email: String::new(),
            row_limit: default_row_limit(),
            feed_limit: default_feed_limit(),
            default_range: default_range(),
            export_dir: None,
        }
    }
}

impl Config {
    /// `$OPSDASH_HOME`, else `~/.opsdash`
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(HOME_ENV)
            && !custom.trim().is_empty()
        {
            return PathBuf::from(custom);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".opsdash")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("opsdash.conf")
    }

    /// Return the default path of the SQLite record store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("opsdash.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Keys missing from the file fall back to their defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Create the config directory and a config file if none exists yet.
    /// An existing file is kept; only `database` is updated when given.
    pub fn init_all(custom_db: Option<String>, admin_email: Option<String>) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut cfg = Self::load()?;

        if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            cfg.database = if p.is_absolute() {
                name.clone()
            } else {
                dir.join(p).to_string_lossy().to_string()
            };
        }
        if let Some(email) = admin_email {
            cfg.admin_email = email.trim().to_string();
        }

        cfg.save()?;
        Ok(cfg)
    }

    /// The privileged account, or a credentials error when none is configured.
    pub fn require_admin_email(&self) -> AppResult<&str> {
        let email = self.admin_email.trim();
        if email.is_empty() {
            return Err(AppError::MissingCredentials(
                "`admin_email` is not set; run `opsdash init --admin <email>`".to_string(),
            ));
        }
        Ok(email)
    }

    /// Directory for exports when no explicit file is given.
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

/// `~/exports` → `$HOME/exports`
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

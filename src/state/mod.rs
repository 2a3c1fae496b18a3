//! Client-side preferences persisted between runs.
//!
//! Plain key/value YAML, not versioned. Every key is read on its own and
//! falls back to its default when missing or unreadable, so one bad value
//! never resets the others.

use crate::config::Config;
use crate::core::filter::ALL_PROPERTIES;
use crate::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Plain,
}

impl Theme {
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            "plain" | "none" => Some(Theme::Plain),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Plain => "plain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientState {
    pub theme: Theme,
    pub property_filter: String,
    /// Set once the privileged user has passed the login gate.
    pub session_gate: bool,
}

fn default_property() -> String {
    ALL_PROPERTIES.to_string()
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            property_filter: default_property(),
            session_gate: false,
        }
    }
}

/// Value of `key`, or `None` when absent or not of the expected type.
fn read_key<T: DeserializeOwned>(map: &Mapping, key: &str) -> Option<T> {
    let value = map.get(key)?;
    match serde_yaml::from_value(value.clone()) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("client state: ignoring '{key}': {e}");
            None
        }
    }
}

impl ClientState {
    pub fn default_file() -> PathBuf {
        Config::config_dir().join("client_state.yaml")
    }

    /// Read the state file key by key. A missing file, a file that is not a
    /// mapping, or a single bad value only costs the affected defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };
        let map = match serde_yaml::from_str::<Value>(&content) {
            Ok(Value::Mapping(map)) => map,
            Ok(Value::Null) => return Self::default(),
            Ok(_) => {
                log::warn!("client state {} is not a mapping, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("ignoring unreadable client state {}: {e}", path.display());
                return Self::default();
            }
        };

        let defaults = Self::default();
        Self {
            theme: read_key(&map, "theme").unwrap_or(defaults.theme),
            property_filter: read_key(&map, "property_filter")
                .unwrap_or(defaults.property_filter),
            session_gate: read_key(&map, "session_gate").unwrap_or(defaults.session_gate),
        }
    }

    pub fn load() -> Self {
        Self::load_from(&Self::default_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::default_file())
    }
}

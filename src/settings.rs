//! Read-only access to user settings (`settings.json`-style key-value store).
//!
//! The pipeline never writes settings; tone customisations and credentials are
//! edited elsewhere and read here as a snapshot.

use crate::llm::{LlmConfig, DEFAULT_LLM_TIMEOUT, DEFAULT_MODEL, OPENAI_API_URL};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Key-value lookup over persisted settings
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
}

/// Read a typed setting, falling back to `default` when absent or malformed
pub fn get_setting<T: DeserializeOwned>(store: &dyn SettingsStore, key: &str, default: T) -> T {
    store
        .get(key)
        .and_then(|v| match serde_json::from_value(v) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                log::warn!("Settings: ignoring malformed '{}': {}", key, e);
                None
            }
        })
        .unwrap_or(default)
}

/// Settings loaded once from a JSON object file
#[derive(Debug, Clone, Default)]
pub struct JsonFileStore {
    values: Map<String, Value>,
}

impl JsonFileStore {
    /// Load a settings file. A missing file is treated as empty settings.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            log::debug!("Settings: {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let values: Map<String, Value> = serde_json::from_str(&raw)?;
        log::debug!("Settings: loaded {} keys from {}", values.len(), path.display());
        Ok(Self { values })
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }
}

/// In-process settings, for embedding callers and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }
}

/// Build the generation backend configuration from settings
pub fn read_llm_config(store: &dyn SettingsStore) -> LlmConfig {
    let api_key: String = get_setting(store, "api_key", String::new());
    let model: String = get_setting(store, "model", String::new());
    let api_url: String = get_setting(store, "api_url", String::new());
    let timeout_secs: u64 =
        get_setting(store, "request_timeout_secs", DEFAULT_LLM_TIMEOUT.as_secs());

    LlmConfig {
        api_key: api_key.trim().to_string(),
        model: if model.trim().is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            model.trim().to_string()
        },
        api_url: if api_url.trim().is_empty() {
            OPENAI_API_URL.to_string()
        } else {
            api_url.trim().to_string()
        },
        timeout: Duration::from_secs(timeout_secs.max(1)),
    }
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::AppError;

pub const CONFIG_FILE_ENV: &str = "BA_CONFIG_FILE";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const API_BASE_ENV: &str = "LLM_API_BASE";
pub const MODEL_ENV: &str = "LLM_MODEL";
pub const BOOK_SOURCE_URL_ENV: &str = "BOOK_SOURCE_URL";
pub const SERVER_HOST_ENV: &str = "SERVER_HOST";
pub const SERVER_PORT_ENV: &str = "SERVER_PORT";

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LlmConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: consts::DEFAULT_API_BASE.to_string(),
            model: consts::DEFAULT_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BookSourceConfig {
    pub base_url: String,
}

impl Default for BookSourceConfig {
    fn default() -> Self {
        Self {
            base_url: consts::DEFAULT_BOOK_SOURCE_URL.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: consts::DEFAULT_SERVER_HOST.to_string(),
            port: consts::DEFAULT_SERVER_PORT,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub book_source: BookSourceConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Builds a config from key lookups, falling back to defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(api_key) = lookup(API_KEY_ENV) {
            config.llm.api_key = api_key;
        }
        if let Some(api_base) = lookup(API_BASE_ENV) {
            config.llm.api_base = api_base.trim_end_matches('/').to_string();
        }
        if let Some(model) = lookup(MODEL_ENV) {
            config.llm.model = model;
        }
        if let Some(base_url) = lookup(BOOK_SOURCE_URL_ENV) {
            config.book_source.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(host) = lookup(SERVER_HOST_ENV) {
            config.server.host = host;
        }
        if let Some(port) = lookup(SERVER_PORT_ENV) {
            config.server.port = port.parse().map_err(|_| {
                AppError::ConfigError(format!("invalid {SERVER_PORT_ENV}: {port:?}"))
            })?;
        }

        Ok(config)
    }
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, AppError>;
}

pub struct EnvConfigLoader;

impl EnvConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for EnvConfigLoader {
    fn load_config(&self) -> Result<Config, AppError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Loads a JSON config file. `llm.api_key` holds the name of the environment
/// variable carrying the key, not the key itself.
pub struct FileConfigLoader {
    path: PathBuf,
}

impl FileConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load_config(&self) -> Result<Config, AppError> {
        let config_str = std::fs::read_to_string(&self.path)?;
        let mut config: Config = serde_json::from_str(&config_str)?;

        config.llm.api_key = std::env::var(&config.llm.api_key).unwrap_or_default();

        Ok(config)
    }
}

pub fn load_config() -> Result<Config, AppError> {
    match std::env::var(CONFIG_FILE_ENV) {
        Ok(path) => FileConfigLoader::new(path).load_config(),
        Err(_) => EnvConfigLoader::new().load_config(),
    }
}

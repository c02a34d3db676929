//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `wares.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Document store settings.
    pub store: StoreConfig,
    /// Bulk-load settings.
    pub load: LoadConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// MongoDB connection configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Connection string.
    pub uri: String,
    /// Database name.
    pub database: String,
    /// Collection holding the records.
    pub collection: String,
    /// Server-selection timeout in milliseconds.
    pub server_selection_timeout_ms: u64,
    /// Connect timeout in milliseconds.
    pub connect_timeout_ms: u64,
}

/// Bulk-load configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Directory scanned for `*.json` seed files.
    pub directory: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `wares.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("wares.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("WARES_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("WARES_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("WARES_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("WARES_MONGODB_URI") {
            self.store.uri = val;
        }
        if let Ok(val) = std::env::var("WARES_DATABASE") {
            self.store.database = val;
        }
        if let Ok(val) = std::env::var("WARES_COLLECTION") {
            self.store.collection = val;
        }
        if let Ok(val) = std::env::var("WARES_DATA_DIR") {
            self.load.directory = val;
        }
        if let Ok(val) = std::env::var("WARES_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.store.server_selection_timeout_ms == 0 || self.store.connect_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "store timeouts must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the storage adapter configuration.
    #[must_use]
    pub fn store_config(&self) -> wares_adapter_storage_mongodb::Config {
        wares_adapter_storage_mongodb::Config {
            uri: self.store.uri.clone(),
            database: self.store.database.clone(),
            server_selection_timeout: Duration::from_millis(self.store.server_selection_timeout_ms),
            connect_timeout: Duration::from_millis(self.store.connect_timeout_ms),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "wares".to_string(),
            collection: "users".to_string(),
            server_selection_timeout_ms: 5_000,
            connect_timeout_ms: 10_000,
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            directory: "user_data_files".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "waresd=info,wares=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

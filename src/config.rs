//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built UI (Trunk `dist/`) served for every non-API path
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "./pawconnect-ui/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            cors_origins: vec![
                "http://localhost:8084".to_string(),
                "http://127.0.0.1:8084".to_string(),
            ],
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(format!("{}:{}", self.host, self.port)))
    }
}

/// Where the dataset comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetConfig {
    /// JSON file replacing the bundled dataset
    pub path: Option<String>,
}

impl DatasetConfig {
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref().map(Path::new)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub fn filter_directive(&self) -> String {
        format!("pawconnect={},tower_http=debug", self.level)
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("pawconnect").join("config.toml")),
            Some(PathBuf::from("/etc/pawconnect/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `PAWCONNECT_*` overrides read through `lookup`
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("PAWCONNECT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PAWCONNECT_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid PAWCONNECT_PORT: {}", port),
            }
        }
        if let Some(dir) = lookup("PAWCONNECT_STATIC_DIR") {
            self.server.static_dir = dir;
        }

        if let Some(path) = lookup("PAWCONNECT_DATASET") {
            self.dataset.path = Some(path);
        }

        if let Some(level) = lookup("PAWCONNECT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PAWCONNECT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# PawConnect Configuration
#
# Environment variables override these settings:
# - PAWCONNECT_HOST
# - PAWCONNECT_PORT
# - PAWCONNECT_STATIC_DIR
# - PAWCONNECT_DATASET
# - PAWCONNECT_LOG_LEVEL
# - PAWCONNECT_LOG_FORMAT

[server]
# Listen address
host = "127.0.0.1"
port = 8080

# Built frontend (output of `trunk build` in pawconnect-ui/)
static_dir = "./pawconnect-ui/dist"

# Allowed CORS origins (the Trunk dev server)
cors_origins = ["http://localhost:8084", "http://127.0.0.1:8084"]

[dataset]
# Replace the bundled mock data with a JSON file of the same shape
# path = "./data/dataset.json"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert!(config.dataset.path().is_none());
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "127.0.0.1:8080".parse().unwrap()
        );
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.cors_origins.len(), 2);
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nport = 9000\n\n[dataset]\npath = \"/srv/pets.json\"\n\n[logging]\nformat = \"json\""
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.dataset.path(), Some(Path::new("/srv/pets.json")));
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/pawconnect.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PAWCONNECT_HOST", "0.0.0.0"),
            ("PAWCONNECT_PORT", "3000"),
            ("PAWCONNECT_DATASET", "/tmp/data.json"),
            ("PAWCONNECT_LOG_LEVEL", "debug"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.dataset.path.as_deref(), Some("/tmp/data.json"));
        assert_eq!(config.logging.filter_directive(), "pawconnect=debug,tower_http=debug");
    }

    #[test]
    fn test_bad_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "PAWCONNECT_PORT").then(|| "http".to_string()));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_invalid_address() {
        let mut config = Config::default();
        config.server.host = "not a host".into();
        assert!(matches!(
            config.server.socket_addr(),
            Err(ConfigError::InvalidAddress(_))
        ));
    }
}

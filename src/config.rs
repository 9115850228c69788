//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Socket address string for binding
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Compiled front-end bundle
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Directory produced by `trunk build`
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    /// SPA shell, relative to `dist_dir`
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Serve the shell for unknown non-file paths so client routes deep-link
    #[serde(default = "default_spa_fallback")]
    pub spa_fallback: bool,
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("payra-ui/dist")
}

fn default_index_file() -> String {
    "index.html".to_string()
}

fn default_spa_fallback() -> bool {
    true
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dist_dir: default_dist_dir(),
            index_file: default_index_file(),
            spa_fallback: default_spa_fallback(),
        }
    }
}

impl AssetsConfig {
    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join(&self.index_file)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable (development)
    #[default]
    Pretty,
    /// One JSON object per line (production)
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Invalid(format!("unknown log format: {}", other))),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// A loaded config plus the diagnostics gathered while loading it.
///
/// Loading runs before the tracing subscriber exists, so warnings are kept
/// here and emitted by [`LoadedConfig::log`] once logging is up.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from; `None` for defaults plus environment
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    /// Emit the source and every warning through `tracing`
    pub fn log(&self) {
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> LoadedConfig {
        let mut config = Config::default();
        let warnings = config.apply_env_overrides();
        LoadedConfig {
            config,
            source: None,
            warnings,
        }
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<LoadedConfig, ConfigError> {
        let mut config = Self::load(path)?;
        let warnings = config.apply_env_overrides();
        Ok(LoadedConfig {
            config,
            source: Some(path.to_path_buf()),
            warnings,
        })
    }

    /// Load from default locations or environment
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("payra").join("config.toml")),
            Some(PathBuf::from("/etc/payra/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first readable file among `paths`, falling back to defaults.
    /// Files that exist but fail to load are reported as warnings.
    pub fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        let mut warnings = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(mut loaded) => {
                    warnings.append(&mut loaded.warnings);
                    loaded.warnings = warnings;
                    return loaded;
                }
                Err(e) => warnings.push(format!("Failed to load config from {:?}: {}", path, e)),
            }
        }

        let mut loaded = Self::from_env();
        warnings.append(&mut loaded.warnings);
        loaded.warnings = warnings;
        loaded
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Vec<String> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (the environment in production).
    /// Returns a warning for each value that was ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        if let Some(host) = lookup("PAYRA_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PAYRA_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => warnings.push(format!("Ignoring invalid PAYRA_PORT: {}", port)),
            }
        }

        if let Some(dist_dir) = lookup("PAYRA_DIST_DIR") {
            self.assets.dist_dir = PathBuf::from(dist_dir);
        }
        if let Some(fallback) = lookup("PAYRA_SPA_FALLBACK") {
            self.assets.spa_fallback = fallback.to_lowercase() != "false" && fallback != "0";
        }

        if let Some(level) = lookup("PAYRA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PAYRA_LOG_FORMAT") {
            match format.parse::<LogFormat>() {
                Ok(f) => self.logging.format = f,
                Err(e) => warnings.push(format!("Ignoring PAYRA_LOG_FORMAT: {}", e)),
            }
        }

        warnings
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Payra Pay Configuration
#
# Environment variables override these settings:
# - PAYRA_HOST
# - PAYRA_PORT
# - PAYRA_DIST_DIR
# - PAYRA_SPA_FALLBACK
# - PAYRA_LOG_LEVEL
# - PAYRA_LOG_FORMAT

[server]
# Host to bind to
host = "0.0.0.0"

# Port to listen on
port = 8084

[assets]
# Output directory of `trunk build` for payra-ui
dist_dir = "payra-ui/dist"

# SPA shell inside dist_dir
index_file = "index.html"

# Serve the shell for client routes such as /login and /signup
spa_fallback = true

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

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8084");
        assert_eq!(config.assets.index_path(), PathBuf::from("payra-ui/dist/index.html"));
        assert!(config.assets.spa_fallback);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8084);
        assert_eq!(config.assets.dist_dir, PathBuf::from("payra-ui/dist"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.assets.index_file, "index.html");
    }

    #[test]
    fn test_json_log_format() {
        let config = Config::parse("[logging]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(Config::parse("[logging]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("PAYRA_HOST", "127.0.0.1"),
            ("PAYRA_PORT", "3000"),
            ("PAYRA_DIST_DIR", "/srv/payra"),
            ("PAYRA_SPA_FALLBACK", "false"),
            ("PAYRA_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        let warnings = config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert!(warnings.is_empty());

        assert_eq!(config.server.addr(), "127.0.0.1:3000");
        assert_eq!(config.assets.dist_dir, PathBuf::from("/srv/payra"));
        assert!(!config.assets.spa_fallback);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_overrides_are_ignored_with_warnings() {
        let mut config = Config::default();
        let warnings = config.apply_overrides(|key| match key {
            "PAYRA_PORT" => Some("http".to_string()),
            "PAYRA_LOG_FORMAT" => Some("xml".to_string()),
            _ => None,
        });

        assert_eq!(config.server.port, 8084);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("PAYRA_PORT: http"));
        assert!(warnings[1].contains("unknown log format: xml"));
    }

    #[test]
    fn test_malformed_file_falls_back_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = \"not-a-number\"\n").unwrap();

        let loaded = Config::load_first(&[path.clone()]);

        assert!(loaded.source.is_none());
        assert_eq!(loaded.config.server.port, 8084);
        let warning = loaded
            .warnings
            .iter()
            .find(|w| w.starts_with("Failed to load config"))
            .expect("load failure should be reported");
        assert!(warning.contains(&format!("{:?}", path)));
    }

    #[test]
    fn test_first_valid_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        let missing = dir.path().join("missing.toml");
        std::fs::write(&broken, "[server\n").unwrap();
        std::fs::write(&good, "[server]\nport = 9100\n").unwrap();

        let loaded = Config::load_first(&[missing, broken, good.clone()]);

        assert_eq!(loaded.source.as_deref(), Some(good.as_path()));
        assert_eq!(loaded.config.server.port, 9100);
        assert!(loaded.warnings.iter().any(|w| w.contains("broken.toml")));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/payra.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

//! Server configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}. Must be between 1 and 65535")]
    InvalidPort(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Server configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Emit logs as JSON lines instead of human-readable text
    pub json_logs: bool,
    /// Allow cross-origin requests from browser dashboards
    pub cors_permissive: bool,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: LogLevel::Info,
            json_logs: false,
            cors_permissive: true,
        }
    }
}

/// Host override read by [`ServerConfig::apply_env`]
pub const ENV_HOST: &str = "ENERGYMIX_SERVER_HOST";
/// Port override read by [`ServerConfig::apply_env`]
pub const ENV_PORT: &str = "ENERGYMIX_SERVER_PORT";
/// Log level override, shared with the CLI
pub const ENV_LOG_LEVEL: &str = "ENERGYMIX_LOG_LEVEL";

impl ServerConfig {
    /// Create a new ServerConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: ServerConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from environment variables, where set
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = std::env::var(ENV_HOST) {
            self.host = host;
        }

        if let Ok(port_str) = std::env::var(ENV_PORT) {
            self.port = port_str
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port_str.clone()))?;
        }

        if let Ok(log_level) = std::env::var(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port.to_string()));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::InvalidHost(self.host.clone()));
        }

        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if cli.json_logs {
            self.json_logs = true;
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Host address override
    pub host: Option<String>,
    /// Port override
    pub port: Option<u16>,
    /// Log level override
    pub log_level: Option<String>,
    /// Force JSON log output
    pub json_logs: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<ServerConfig, ConfigError> {
    let mut config = if let Some(config_path) = &cli.config_file {
        ServerConfig::from_file(config_path)?
    } else {
        ServerConfig::default()
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // Tests that touch ENERGYMIX_* run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for var in [ENV_HOST, ENV_PORT, ENV_LOG_LEVEL] {
            std::env::remove_var(var);
        }
        guard
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(!config.json_logs);
        assert!(config.cors_permissive);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_validate() {
        let mut config = ServerConfig::default();
        config.port = 0;
        assert!(config.validate().is_err());

        config.port = 65535;
        assert!(config.validate().is_ok());

        config.host = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidHost(_))));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = ServerConfig::default();
        let cli = CliArgs {
            host: Some("192.168.1.1".to_string()),
            port: Some(9000),
            log_level: Some("debug".to_string()),
            json_logs: true,
            config_file: None,
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.host, "192.168.1.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.json_logs);
    }

    #[test]
    fn test_cli_args_reject_bad_log_level() {
        let mut config = ServerConfig::default();
        let cli = CliArgs {
            log_level: Some("loud".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.merge_with_cli(&cli),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            host = "127.0.0.1"
            port = 3000
            log_level = "debug"
            json_logs = true
            cors_permissive = false
        "#;

        let config: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.json_logs);
        assert!(!config.cors_permissive);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let toml_str = r#"
            port = 9000
        "#;

        let config: ServerConfig = toml::from_str(toml_str).unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_toml_rejects_bad_log_level() {
        let result: Result<ServerConfig, _> = toml::from_str(r#"log_level = "verbose""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let path = PathBuf::from("/nonexistent/energymix-server.toml");
        assert!(matches!(
            ServerConfig::from_file(&path),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_build_config_with_defaults() {
        let _env = lock_env();

        let cli = CliArgs::default();
        let config = build_config(&cli).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPort("0".to_string());
        assert!(err.to_string().contains("Invalid port"));

        let err = ConfigError::InvalidLogLevel("bad".to_string());
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_apply_env() {
        let _env = lock_env();
        std::env::set_var(ENV_HOST, "127.0.0.1");
        std::env::set_var(ENV_PORT, "7070");
        std::env::set_var(ENV_LOG_LEVEL, "WARN");

        let mut config = ServerConfig::default();
        config.apply_env().unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7070);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.socket_addr(), "127.0.0.1:7070");

        for var in [ENV_HOST, ENV_PORT, ENV_LOG_LEVEL] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_apply_env_rejects_bad_values() {
        let _env = lock_env();
        std::env::set_var(ENV_PORT, "eighty");
        let mut config = ServerConfig::default();
        assert!(matches!(
            config.apply_env(),
            Err(ConfigError::InvalidPort(port)) if port == "eighty"
        ));

        std::env::set_var(ENV_PORT, "70000");
        assert!(matches!(
            ServerConfig::default().apply_env(),
            Err(ConfigError::InvalidPort(_))
        ));

        std::env::remove_var(ENV_PORT);
        std::env::set_var(ENV_LOG_LEVEL, "chatty");
        assert!(matches!(
            ServerConfig::default().apply_env(),
            Err(ConfigError::InvalidLogLevel(_))
        ));

        std::env::remove_var(ENV_LOG_LEVEL);
    }

    #[test]
    fn test_build_config_cli_beats_env() {
        let _env = lock_env();
        std::env::set_var(ENV_HOST, "10.0.0.1");
        std::env::set_var(ENV_PORT, "7070");
        std::env::set_var(ENV_LOG_LEVEL, "warn");

        let cli = CliArgs {
            port: Some(9090),
            log_level: Some("trace".to_string()),
            ..Default::default()
        };
        let config = build_config(&cli).unwrap();
        assert_eq!(config.host, "10.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.log_level, LogLevel::Trace);

        for var in [ENV_HOST, ENV_PORT, ENV_LOG_LEVEL] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_build_config_env_port_zero_fails_validation() {
        let _env = lock_env();
        std::env::set_var(ENV_PORT, "0");

        assert!(matches!(
            build_config(&CliArgs::default()),
            Err(ConfigError::InvalidPort(_))
        ));

        std::env::remove_var(ENV_PORT);
    }
}

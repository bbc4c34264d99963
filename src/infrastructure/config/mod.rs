//! Configuration management

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use crate::application::errors::ConfigError;
use crate::application::services::DEFAULT_HISTORY_WINDOW;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub server: ServerConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ChatConfig {
    /// Prior turns forwarded with each question
    pub history_window: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            chat: ChatConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn save(&self, path: impl Into<PathBuf>) -> Result<(), ConfigError> {
        std::fs::write(path.into(), self.to_yaml()?)?;
        Ok(())
    }

    /// Load `path` if it exists, otherwise defaults; then apply environment overrides
    pub fn resolve(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let mut config = if path.exists() {
            Self::load(&path)?
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Self::default()
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Override fields from `MC_ASSISTANT_*` environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("MC_ASSISTANT_HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("MC_ASSISTANT_PORT") {
            self.server.port = port.parse()
                .map_err(|_| ConfigError::InvalidValue(format!("MC_ASSISTANT_PORT: {}", port)))?;
        }

        if let Some(window) = lookup("MC_ASSISTANT_HISTORY_WINDOW") {
            self.chat.history_window = window.parse()
                .map_err(|_| ConfigError::InvalidValue(format!("MC_ASSISTANT_HISTORY_WINDOW: {}", window)))?;
        }

        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue("server.port must be non-zero".to_string()));
        }
        if self.chat.history_window == 0 {
            return Err(ConfigError::InvalidValue("chat.history-window must be at least 1".to_string()));
        }
        self.server.host.parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidValue(format!("server.host: {}", self.server.host)))?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.server.host.parse()
            .map_err(|_| ConfigError::InvalidValue(format!("server.host: {}", self.server.host)))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.chat.history_window, 6);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = Config::from_yaml("server:\n  port: 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.chat.history_window, 6);
    }

    #[test]
    fn test_kebab_case_keys() {
        let yaml = "chat:\n  history-window: 4\nlogging:\n  format: json\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.chat.history_window, 4);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_vars(vars(&[
            ("MC_ASSISTANT_HOST", "127.0.0.1"),
            ("MC_ASSISTANT_PORT", "9090"),
            ("MC_ASSISTANT_HISTORY_WINDOW", "10"),
        ])).unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9090");
        assert_eq!(config.chat.history_window, 10);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        let err = config.apply_vars(vars(&[("MC_ASSISTANT_PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));

        assert!(Config::from_yaml("server:\n  port: 0\n").is_err());
        assert!(Config::from_yaml("chat:\n  history-window: 0\n").is_err());
        assert!(Config::from_yaml("server:\n  host: not-an-ip\n").is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = Config::default();
        config.server.port = 4242;
        let parsed = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}

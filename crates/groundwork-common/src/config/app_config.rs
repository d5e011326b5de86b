//! Application configuration structs
//!
//! Loads configuration from environment variables (with `.env` support).

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub telemetry: TelemetrySettings,
    pub id: IdSettings,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Telemetry settings
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    /// Log level filter (e.g. "info", "debug")
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON-formatted log lines
    #[serde(default)]
    pub json: bool,
}

/// Id generator settings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct IdSettings {
    /// Fixed node id for generated identifiers; random when unset
    #[serde(default)]
    pub node: Option<u8>,
}

// Default value functions
fn default_app_name() -> String {
    "groundwork".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: match env::var("APP_ENV") {
                    Ok(raw) => match raw.to_lowercase().as_str() {
                        "development" => Environment::Development,
                        "staging" => Environment::Staging,
                        "production" => Environment::Production,
                        _ => {
                            return Err(ConfigError::InvalidVar {
                                var: "APP_ENV",
                                value: raw,
                            })
                        }
                    },
                    Err(_) => default_env(),
                },
            },
            telemetry: TelemetrySettings {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level()),
                json: match env::var("LOG_JSON") {
                    Ok(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidVar {
                        var: "LOG_JSON",
                        value: raw,
                    })?,
                    Err(_) => false,
                },
            },
            id: IdSettings {
                node: match env::var("ID_NODE") {
                    Ok(raw) => Some(raw.parse().map_err(|_| ConfigError::InvalidVar {
                        var: "ID_NODE",
                        value: raw,
                    })?),
                    Err(_) => None,
                },
            },
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

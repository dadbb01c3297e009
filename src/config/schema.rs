//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

use crate::pattern::{InvalidMethodError, RestPattern, ANY_PATH};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener and request settings.
    pub server: ServerConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,

    /// Interceptors, in declaration order.
    pub interceptors: Vec<InterceptorConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// One interceptor: its logic, scope and position.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InterceptorConfig {
    /// Unique identifier for logging/metrics.
    pub name: String,

    /// Lower runs earlier; ties keep declaration order.
    #[serde(default)]
    pub order: i32,

    #[serde(default)]
    pub logic: LogicConfig,

    #[serde(default)]
    pub include: Vec<PatternConfig>,

    #[serde(default)]
    pub exclude: Vec<PatternConfig>,
}

impl InterceptorConfig {
    pub fn include_patterns(&self) -> Result<Vec<RestPattern>, InvalidMethodError> {
        self.include.iter().map(PatternConfig::to_pattern).collect()
    }

    pub fn exclude_patterns(&self) -> Result<Vec<RestPattern>, InvalidMethodError> {
        self.exclude.iter().map(PatternConfig::to_pattern).collect()
    }
}

/// Built-in interceptor logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogicConfig {
    /// Always continue.
    #[default]
    PassThrough,

    /// Log and continue.
    Log,

    /// Reject with 401 unless the header is present.
    RequireHeader { header: String },
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PatternConfig {
    #[serde(default = "default_path")]
    pub path: String,

    /// Method tokens; empty means all methods.
    #[serde(default)]
    pub methods: Vec<String>,
}

fn default_path() -> String {
    ANY_PATH.to_string()
}

impl PatternConfig {
    pub fn to_pattern(&self) -> Result<RestPattern, InvalidMethodError> {
        RestPattern::parse(self.path.clone(), &self.methods)
    }
}

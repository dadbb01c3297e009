//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use axum::http::HeaderName;
use thiserror::Error;

use crate::config::schema::{AppConfig, LogicConfig};
use crate::pattern::{HttpMethod, InvalidMethodError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address `{0}`")]
    InvalidBindAddress(String),

    #[error("invalid metrics address `{0}`")]
    InvalidMetricsAddress(String),

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("interceptor name must not be empty")]
    EmptyName,

    #[error("duplicate interceptor name `{0}`")]
    DuplicateName(String),

    #[error("interceptor `{interceptor}`: {source}")]
    InvalidMethod {
        interceptor: String,
        source: InvalidMethodError,
    },

    #[error("interceptor `{interceptor}`: invalid header name `{header}`")]
    InvalidHeader { interceptor: String, header: String },
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(config.server.bind_address.clone()));
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    let mut seen = HashSet::new();
    for interceptor in &config.interceptors {
        let name = interceptor.name.as_str();
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyName);
        } else if !seen.insert(name) {
            errors.push(ValidationError::DuplicateName(name.to_string()));
        }

        let tokens = interceptor
            .include
            .iter()
            .chain(&interceptor.exclude)
            .flat_map(|pattern| &pattern.methods);
        for token in tokens {
            if let Err(source) = token.parse::<HttpMethod>() {
                errors.push(ValidationError::InvalidMethod {
                    interceptor: name.to_string(),
                    source,
                });
            }
        }

        if let LogicConfig::RequireHeader { header } = &interceptor.logic {
            if HeaderName::from_bytes(header.as_bytes()).is_err() {
                errors.push(ValidationError::InvalidHeader {
                    interceptor: name.to_string(),
                    header: header.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{InterceptorConfig, PatternConfig};

    fn interceptor(name: &str, methods: &[&str]) -> InterceptorConfig {
        InterceptorConfig {
            name: name.to_string(),
            order: 0,
            logic: LogicConfig::PassThrough,
            include: vec![PatternConfig {
                path: "/api/**".to_string(),
                methods: methods.iter().map(|m| m.to_string()).collect(),
            }],
            exclude: Vec::new(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.server.bind_address = "not-an-address".to_string();
        config.server.request_timeout_secs = 0;
        config.interceptors.push(interceptor("auth", &["GET", "FETCH"]));
        config.interceptors.push(interceptor("auth", &["POST"]));
        config.interceptors.push(InterceptorConfig {
            logic: LogicConfig::RequireHeader {
                header: "bad header".to_string(),
            },
            ..interceptor("keys", &[])
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::DuplicateName("auth".to_string())));
        assert!(errors.contains(&ValidationError::InvalidMethod {
            interceptor: "auth".to_string(),
            source: InvalidMethodError {
                token: "FETCH".to_string()
            },
        }));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidHeader { .. })));
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = AppConfig::default();
        config.observability.metrics_address = "nope".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::InvalidMetricsAddress("nope".to_string())]
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut config = AppConfig::default();
        config.interceptors.push(interceptor("  ", &[]));
        assert_eq!(validate_config(&config).unwrap_err(), vec![ValidationError::EmptyName]);
    }
}

//! Turns validated configuration into a runtime interceptor chain.

use std::sync::Arc;

use axum::http::HeaderName;

use crate::config::loader::ConfigError;
use crate::config::schema::{AppConfig, InterceptorConfig, LogicConfig};
use crate::config::validation::{validate_config, ValidationError};
use crate::interceptor::builtin::{LogRequests, RequireHeader};
use crate::interceptor::{Interceptor, InterceptorChain, InterceptorRegistry, PassThrough, RestInterceptor};
use crate::pattern::InvalidMethodError;

/// Validate `config` and build the chain it describes.
pub fn build_chain(config: &AppConfig) -> Result<InterceptorChain, ConfigError> {
    validate_config(config).map_err(ConfigError::Validation)?;

    let mut registry = InterceptorRegistry::new();
    for interceptor in &config.interceptors {
        register(&mut registry, interceptor).map_err(|e| ConfigError::Validation(vec![e]))?;
    }
    Ok(registry.build())
}

fn register(registry: &mut InterceptorRegistry, config: &InterceptorConfig) -> Result<(), ValidationError> {
    let invalid_method = |source: InvalidMethodError| ValidationError::InvalidMethod {
        interceptor: config.name.clone(),
        source,
    };
    let include = config.include_patterns().map_err(invalid_method)?;
    let exclude = config.exclude_patterns().map_err(invalid_method)?;
    let logic = build_logic(config)?;

    registry
        .add(RestInterceptor::from_arc(config.name.clone(), logic))
        .add_patterns(include)
        .exclude_patterns(exclude)
        .order(config.order);

    tracing::debug!(
        interceptor = %config.name,
        order = config.order,
        include = config.include.len(),
        exclude = config.exclude.len(),
        "Interceptor registered"
    );
    Ok(())
}

fn build_logic(config: &InterceptorConfig) -> Result<Arc<dyn Interceptor>, ValidationError> {
    let logic: Arc<dyn Interceptor> = match &config.logic {
        LogicConfig::PassThrough => Arc::new(PassThrough),
        LogicConfig::Log => Arc::new(LogRequests),
        LogicConfig::RequireHeader { header } => {
            let header = HeaderName::from_bytes(header.as_bytes()).map_err(|_| {
                ValidationError::InvalidHeader {
                    interceptor: config.name.clone(),
                    header: header.clone(),
                }
            })?;
            Arc::new(RequireHeader::new(header))
        }
    };
    Ok(logic)
}

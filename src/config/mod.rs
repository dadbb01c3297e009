//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → builder.rs (patterns + logic → InterceptorChain)
//!     → shared via ArcSwap to the middleware
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → builder.rs rebuilds the chain
//!     → atomic swap of the shared chain
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Method tokens stay strings until validation so every bad token is reported
//! - Validation separates syntactic (serde) from semantic checks

pub mod builder;
pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use builder::build_chain;
pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, InterceptorConfig, LogicConfig, ObservabilityConfig, PatternConfig, ServerConfig};
pub use validation::ValidationError;

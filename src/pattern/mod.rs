//! Request pattern subsystem.
//!
//! # Data Flow
//! ```text
//! Configuration (startup):
//!     path template + method tokens
//!     → method.rs (parse tokens, reject unknown)
//!     → path.rs (compile template segments)
//!     → RestPattern (immutable)
//!     → RestPatterns (ordered include/exclude lists)
//!
//! Per request:
//!     (method, path) → RestPatterns::any_matches → bool
//! ```
//!
//! # Design Decisions
//! - Patterns are immutable once built
//! - An empty method collection always means "all methods"
//! - Matching is pure and allocation-light; safe to share across threads

pub mod method;
pub mod path;
pub mod patterns;
pub mod rest_pattern;

pub use method::{HttpMethod, InvalidMethodError};
pub use path::PathTemplate;
pub use patterns::RestPatterns;
pub use rest_pattern::{RestPattern, RestPatternBuilder, ANY_PATH};

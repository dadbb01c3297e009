//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Gate and chain produce:
//!     → tracing events (bypass at trace, execution at debug, halts at debug)
//!     → metrics.rs (decision and halt counters)
//!
//! Consumers:
//!     → logging.rs (stdout via tracing-subscriber)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;

//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace + timeout layers)
//!     → middleware/intercept.rs (interceptor chain)
//!         → halted: interceptor's response
//!         → continued: handler
//!     → Send to client
//! ```

pub mod middleware;
pub mod server;

pub use middleware::intercept;
pub use server::HttpServer;

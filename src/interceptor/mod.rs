//! Interception subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     InterceptorRegistry::add_interceptor(name, logic)
//!         .add_patterns(..).exclude_patterns(..).order(..)
//!     → build() → InterceptorChain (sorted, immutable)
//!     → SharedChain (ArcSwap, swapped on reload)
//!
//! Per request:
//!     chain.pre_handle(request, response)
//!         for each interceptor in order:
//!             path filter → gate (pre-flight / exclude / include) → process
//!         → Ok(true): continue to handler
//!         → Ok(false): send the interceptor's response
//!         → Err(e): propagate unchanged
//! ```

pub mod builtin;
pub mod chain;
pub mod cors;
pub mod gate;
pub mod registry;

pub use chain::{InterceptorChain, SharedChain};
pub use gate::{interceptor_fn, Decision, FnInterceptor, Interceptor, PassThrough, RestInterceptor};
pub use registry::{InterceptorRegistration, InterceptorRegistry};

//! HTTP middleware.

pub mod intercept;

pub use intercept::intercept;

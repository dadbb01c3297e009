//! Metrics collection and exposition.
//!
//! # Metrics
//! - `interceptor_decisions_total` (counter): gate outcomes by interceptor, decision
//! - `interceptor_halted_total` (counter): requests stopped by interceptor

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::interceptor::Decision;

/// Start the Prometheus scrape endpoint. Requires a running Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

pub fn record_decision(interceptor: &str, decision: Decision) {
    metrics::counter!(
        "interceptor_decisions_total",
        "interceptor" => interceptor.to_string(),
        "decision" => decision.as_str()
    )
    .increment(1);
}

pub fn record_halted(interceptor: &str) {
    metrics::counter!("interceptor_halted_total", "interceptor" => interceptor.to_string()).increment(1);
}

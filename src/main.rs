//! rest-interceptor
//!
//! Serves an echo endpoint behind the interceptor chain declared in a TOML
//! config file.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ TraceLayer ─▶ TimeoutLayer ─▶ intercept middleware ─▶ echo handler
//!                                                        │
//!                                                        ▼
//!                                              InterceptorChain (ArcSwap)
//!                                              ┌─────────────────────────┐
//!                                              │ per interceptor, ordered│
//!                                              │  path filter            │
//!                                              │  pre-flight? → bypass   │
//!                                              │  excluded?   → bypass   │
//!                                              │  !included?  → bypass   │
//!                                              │  process()              │
//!                                              └─────────────────────────┘
//!                                                        ▲
//!                                              ConfigWatcher (--watch)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use rest_interceptor::config::{build_chain, load_config, watcher::ConfigWatcher, AppConfig};
use rest_interceptor::observability::{logging, metrics};
use rest_interceptor::HttpServer;

#[derive(Parser)]
#[command(name = "rest-interceptor")]
#[command(about = "Echo server guarded by pattern-scoped interceptors", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reload interceptors when the config file changes.
    #[arg(long, requires = "config")]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init(&config.observability.log_level);
    tracing::info!("rest-interceptor v{} starting", env!("CARGO_PKG_VERSION"));

    let chain = build_chain(&config)?.into_shared();
    tracing::info!(
        bind_address = %config.server.bind_address,
        interceptors = ?chain.load().names(),
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    // Dropping the watcher stops it, so keep it for the life of the server.
    let _watcher = match (&cli.config, cli.watch) {
        (Some(path), true) => Some(ConfigWatcher::new(path, chain.clone()).run()?),
        _ => None,
    };

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics endpoint");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    HttpServer::new(config, chain).run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

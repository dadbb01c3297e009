//! Configuration file watcher for hot reload.
//!
//! Only the interceptor chain is reloaded; server and observability
//! settings take effect on restart.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::builder::build_chain;
use crate::config::loader::{load_config, ConfigError};
use crate::interceptor::SharedChain;

/// Monitors the configuration file and swaps in a rebuilt chain on change.
pub struct ConfigWatcher {
    path: PathBuf,
    chain: SharedChain,
}

impl ConfigWatcher {
    pub fn new(path: &Path, chain: SharedChain) -> Self {
        Self {
            path: path.to_path_buf(),
            chain,
        }
    }

    /// Start watching the file in a background thread.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.path.clone();
        let chain = self.chain.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    tracing::info!("Config file change detected, reloading...");
                    if let Err(e) = reload(&path, &chain) {
                        tracing::error!(error = %e, "Failed to reload config. Keeping current interceptors.");
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = ?e, "Watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

/// Load `path`, rebuild the chain and publish it. On error the current
/// chain stays in place.
pub fn reload(path: &Path, chain: &SharedChain) -> Result<(), ConfigError> {
    let config = load_config(path)?;
    let rebuilt = build_chain(&config)?;
    tracing::info!(interceptors = ?rebuilt.names(), "Interceptor chain reloaded");
    chain.store(Arc::new(rebuilt));
    Ok(())
}

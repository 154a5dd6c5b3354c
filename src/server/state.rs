//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use super::error::{ServerError, ServerResult};
use crate::config::ServerConfig;
use crate::routing::RouteTable;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Route table used to classify deep links
    pub table: Arc<RouteTable>,
    /// Contents of the client's `index.html`
    pub shell: Arc<String>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state from an already loaded shell document
    pub fn new(table: RouteTable, shell: impl Into<String>, config: ServerConfig) -> Self {
        Self {
            table: Arc::new(table),
            shell: Arc::new(shell.into()),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Read `index.html` from the configured dist directory
    pub async fn load(table: RouteTable, config: ServerConfig) -> ServerResult<Self> {
        let index = config.dist_dir.join("index.html");
        let shell = match tokio::fs::read_to_string(&index).await {
            Ok(shell) => shell,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ServerError::MissingShell(index));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!("Loaded shell from {:?} ({} bytes)", index, shell.len());
        Ok(Self::new(table, shell, config))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Whether a usable shell document is loaded
    pub fn has_shell(&self) -> bool {
        !self.shell.trim().is_empty()
    }
}

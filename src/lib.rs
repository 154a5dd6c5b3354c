//! # Market State
//!
//! Navigation shell of the Market State Analysis single-page client, plus the
//! host server that delivers it.
//!
//! ## Features
//!
//! - **Route table**: eight top-level views behind a fixed URL grammar
//! - **Explicit matching**: segment-by-segment matcher with one named parameter
//! - **Single-page navigation**: history-aware navigator with a render callback
//! - **Host server**: serves the client bundle with deep-link fallback
//!
//! ## Modules
//!
//! - [`routing`]: Route table, path patterns and resolution
//! - [`navigation`]: Location state, history and navigation
//! - [`config`]: Configuration loading (feature `server`)
//! - [`server`]: Axum host for the client bundle (feature `server`)
//!
//! The routing and navigation modules carry no server dependencies and are
//! compiled to WebAssembly by the browser client.
//!
//! ## Quick Start
//!
//! ```rust
//! use market_state::{MemoryHistory, Navigator, Resolution, RouteTable, View};
//!
//! let mut navigator = Navigator::new(
//!     RouteTable::standard(),
//!     MemoryHistory::new("/"),
//!     |resolution: &Resolution| {
//!         println!("mount {:?}", resolution.view());
//!     },
//! );
//!
//! navigator.navigate("/symbol/AAPL").unwrap();
//!
//! let params = navigator.resolution().params().unwrap();
//! assert_eq!(navigator.resolution().view(), Some(View::SymbolDetail));
//! assert_eq!(params.symbol(), Some("AAPL"));
//! ```

pub mod navigation;
pub mod routing;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

// Re-export top-level types for convenience
pub use routing::{
    paths, PathPattern, Route, RouteError, RouteInfo, RouteMatch, RouteParams, RouteResult,
    RouteTable, View,
};

pub use navigation::{
    History, HistoryStep, MemoryHistory, NavigationError, NavigationResult, Navigator,
    Resolution,
};

#[cfg(feature = "server")]
pub use config::{generate_default_config, Config, ConfigError, LogFormat, LoggingConfig, ServerConfig};

#[cfg(feature = "server")]
pub use server::{build_router, serve, AppState, ServerError, ServerResult};

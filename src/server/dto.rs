//! Data Transfer Objects
//!
//! Request and response types for the host server's JSON endpoints.

use serde::{Deserialize, Serialize};

use crate::routing::RouteInfo;

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Shell status
    pub shell: String,
    /// Number of registered routes
    pub routes: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

/// Route table listing
#[derive(Debug, Serialize)]
pub struct RouteListResponse {
    pub routes: Vec<RouteInfo>,
    pub total: usize,
}

/// Query parameters for path resolution
#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    /// Concrete path to resolve, e.g. `/symbol/AAPL`
    #[serde(default)]
    pub path: Option<String>,
}

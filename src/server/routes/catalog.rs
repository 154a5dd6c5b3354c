//! Route Catalog
//!
//! Read-only views of the client route table.
//!
//! - GET /api/v1/routes - List every route pattern and its view
//! - GET /api/v1/resolve?path=... - Resolve a concrete path

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::navigation::Resolution;
use crate::server::dto::{ResolveParams, RouteListResponse};
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// GET /api/v1/routes
pub async fn list_routes(State(state): State<Arc<AppState>>) -> Json<RouteListResponse> {
    let routes = state.table.describe();
    let total = routes.len();
    Json(RouteListResponse { routes, total })
}

/// GET /api/v1/resolve?path=/symbol/AAPL
pub async fn resolve_path(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResolveParams>,
) -> ServerResult<Json<Resolution>> {
    let path = params
        .path
        .ok_or_else(|| ServerError::Validation("missing query parameter: path".to_string()))?;

    if !path.starts_with('/') {
        return Err(ServerError::Validation(format!(
            "path must start with '/': {}",
            path
        )));
    }

    Ok(Json(Resolution::resolve(&state.table, &path)))
}

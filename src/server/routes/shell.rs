//! Shell Route
//!
//! Serves the client's `index.html` for deep links so direct URL entry and
//! page refreshes land in the single-page app. Paths the route table knows
//! get 200; anything else still gets the shell (the client renders its
//! not-found view) but with a 404 status.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::server::state::AppState;

/// Fallback for every GET that is not a static asset
pub async fn serve_shell(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let path = uri.path();

    let status = match state.table.resolve(path) {
        Some(matched) => {
            tracing::debug!(path, view = %matched.view, "serving shell");
            StatusCode::OK
        }
        None => {
            tracing::debug!(path, "serving shell for unknown path");
            StatusCode::NOT_FOUND
        }
    };

    (status, Html(state.shell.as_str().to_owned())).into_response()
}

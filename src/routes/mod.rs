//! Router assembly.
//!
//! API routes sit in front of two static trees: the WASM bundle under `/pkg`
//! and the site itself as the fallback, with `index.html` served for
//! directories.

pub mod submissions;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub fn app(config: &ServerConfig) -> Router {
    let site = ServeDir::new(&config.site_root).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/submissions", post(submissions::create))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

//! Ketolize static site server.
//!
//! Serves the page and its stylesheet from `SITE_ROOT`, the WASM bundle from
//! `PKG_DIR` under `/pkg`, and accepts form submissions at
//! `POST /api/submissions`.

mod config;
mod routes;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(
        port = config.port,
        site_root = %config.site_root.display(),
        pkg_dir = %config.pkg_dir.display(),
        "ketolize listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}

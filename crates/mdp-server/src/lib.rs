//! HTTP server for mdp.
//!
//! Loads one markdown document at startup and serves it as HTML. Every
//! request renders the document again with a fresh [`mdp_parser::Parser`];
//! only the source bytes are shared between requests.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use mdp_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         document: PathBuf::from("README.md"),
//!         ..Default::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use error::ServerError;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Markdown document to serve.
    pub document: PathBuf,
    /// Log every rendered request.
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            document: PathBuf::from("README.md"),
            verbose: false,
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the document cannot be read or the listener cannot
/// be bound.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let document = load_document(&config.document)?;
    tracing::info!(
        path = %config.document.display(),
        bytes = document.len(),
        "Loaded document"
    );

    let state = Arc::new(AppState {
        document,
        verbose: config.verbose,
    });
    let app = app::create_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Read the document served for the lifetime of the process.
fn load_document(path: &Path) -> Result<Vec<u8>, ServerError> {
    std::fs::read(path).map_err(|source| ServerError::ReadDocument {
        path: path.to_path_buf(),
        source,
    })
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from mdp config.
///
/// # Errors
///
/// Returns `ConfigError::Validation` if no document is configured.
pub fn server_config_from_config(
    config: &mdp_config::Config,
    verbose: bool,
) -> Result<ServerConfig, mdp_config::ConfigError> {
    Ok(ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        document: config.require_document()?.to_path_buf(),
        verbose,
    })
}

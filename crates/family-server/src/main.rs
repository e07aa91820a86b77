//! Family Members Server
//!
//! HTTP API over a single in-memory family: list, get, add and delete
//! members. The family lives for the lifetime of the process.

mod error;
mod handlers;
mod services;
mod settings;
mod storage;

use anyhow::{Context, Result};
use axum::{
    extract::Request,
    routing::get,
    Router, ServiceExt,
};
use std::sync::Arc;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use services::FamilyManager;
use settings::ServerConfig;
use storage::MemoryStore;

const DEFAULT_LOG_FILTER: &str = "family_server=info,tower_http=debug";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub family: Arc<FamilyManager>,
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Family Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = ServerConfig::load().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, family={}",
        config.bind_address(),
        config.family_name
    );

    let store = Arc::new(MemoryStore::new(config.family_name.clone()));
    let state = AppState {
        family: Arc::new(FamilyManager::new(store)),
    };

    let app = app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address()))?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// Build the full service, trailing-slash normalization included
fn app(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(handlers::sitemap))
        .route("/health", get(handlers::health))
        .merge(member_routes())
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

fn member_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/members",
            get(handlers::members::list).post(handlers::members::create),
        )
        .route(
            "/members/:id",
            get(handlers::members::get).delete(handlers::members::delete),
        )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#![forbid(unsafe_code)]
//! GeoBook HTTP server.
//!
//! Exposes:
//! - `GET /live`: process liveness
//! - `GET /ready`: readiness (record store check)
//! - `POST /address/create/`: store a new address
//! - `GET /address/:id`: fetch one address
//! - `PUT /address/update/:id`: partial update
//! - `DELETE /address/delete/:id`: remove an address
//! - `GET /address/nearby/`: addresses within a radius in kilometers

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, Request};
use axum::routing::{delete, get, post, put};
use axum::Router;
use geobook_core::SqliteAddressStore;
use tower::limit::ConcurrencyLimitLayer;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod handler_utils;
mod handlers;
mod handlers_health;
mod handlers_nearby;
mod models;
mod state;


use crate::config::AppConfig;
use crate::errors::handle_middleware_error;
use crate::handlers::{
    create_address, delete_address, get_address, live, nearby_addresses, ready, update_address,
};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    init_tracing(config.log_path.as_deref())?;

    let store = SqliteAddressStore::open(&config.database_path).with_context(|| {
        format!(
            "failed to open address database at {}",
            config.database_path.display()
        )
    })?;
    let bind = config.bind;
    let state = AppState::new(config.clone(), Arc::new(store));
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind server socket on {bind}"))?;

    tracing::info!(
        %bind,
        database = %config.database_path.display(),
        timeout_ms = config.request_timeout_ms,
        max_body_bytes = config.max_body_bytes,
        max_concurrency = config.max_concurrency,
        "geobook server started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server exited unexpectedly")?;

    Ok(())
}

fn build_app(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");
    let config = state.config.clone();
    let timeout = Duration::from_millis(config.request_timeout_ms);

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .layer(TimeoutLayer::new(timeout))
        .layer(ConcurrencyLimitLayer::new(config.max_concurrency))
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(move |request: &Request<_>| {
                    let request_id = request
                        .headers()
                        .get(&request_id_header)
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id
                    )
                })
                .on_response(DefaultOnResponse::new().latency_unit(LatencyUnit::Millis)),
        );

    Router::new()
        .route("/live", get(live))
        .route("/ready", get(ready))
        .route("/address/create/", post(create_address))
        .route("/address/nearby/", get(nearby_addresses))
        .route("/address/update/:id", put(update_address))
        .route("/address/delete/:id", delete(delete_address))
        .route("/address/:id", get(get_address))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(middleware)
        .with_state(state)
}

fn init_tracing(log_path: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = match log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };
    if let Err(error) = installed {
        eprintln!("failed to initialize tracing subscriber: {error}");
    }
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(error) => tracing::error!(%error, "failed to install Ctrl-C handler"),
    }
}

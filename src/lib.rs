//! Bookshelf Server Library
//!
//! Users, books, and the ownership link between them, served over HTTP and
//! stored in SQLite. The binary in `main.rs` wires these pieces together;
//! tests build the same router against an in-memory database.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use db::{open_database, open_in_memory, Db};
pub use error::{AppError, Result};

use axum::{http::HeaderValue, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given database and configuration
    pub fn new(db: Db, config: Config) -> Self {
        Self { db, config }
    }
}

/// Build the full application: routes plus CORS and optional request tracing
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);
    let log_requests = state.config.log_requests;

    let router = routes::router(state).layer(cors);

    if log_requests {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::PATCH,
            axum::http::Method::DELETE,
        ])
        .allow_headers(Any)
}

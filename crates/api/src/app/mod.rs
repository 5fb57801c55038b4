//! HTTP API application wiring (Axum router + state).
//!
//! Structured like:
//! - `state.rs`: shared read-only state (datasets + suggestion service)
//! - `routes/`: HTTP routes + handlers (insights, system)

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

pub mod routes;
pub mod state;

pub use state::AppState;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(state))
}

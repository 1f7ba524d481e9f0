//! HTTP API application wiring (Axum router + store injection).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use catalog_infra::ProductStore;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router around an already-initialized store.
pub fn build_app(store: Arc<dyn ProductStore>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/v1", routes::router())
        .layer(ServiceBuilder::new().layer(Extension(store)))
}

use axum::Router;

pub mod products;
pub mod system;

/// Router for the versioned API surface.
pub fn router() -> Router {
    Router::new().merge(products::router())
}

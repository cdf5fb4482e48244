//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all API routes; mounted under `/api` by the router builder
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/v1/products", products::router(state))
        .merge(health::router(state.clone()))
}

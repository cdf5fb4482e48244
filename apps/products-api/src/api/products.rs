//! Products API routes

use axum::Router;
use domain_products::{DynamoProductRepository, ProductService, handlers};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = DynamoProductRepository::new(state.dynamodb.clone(), state.table_name());
    let service = ProductService::new(repository);
    handlers::router(service)
}

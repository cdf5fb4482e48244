//! Custom extractors for Axum handlers.

pub mod json_body;
pub mod query_params;

pub use json_body::JsonBody;
pub use query_params::QueryParams;

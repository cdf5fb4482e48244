//! Products Domain
//!
//! Product catalog records persisted in DynamoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + DynamoDB and in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_products::{handlers, DynamoProductRepository, ProductService};
//!
//! let repository = DynamoProductRepository::new(client, "products-db");
//! let service = ProductService::new(repository);
//! let router = handlers::router(service);
//! ```

pub mod dynamodb;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use dynamodb::DynamoProductRepository;
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductRepository;
pub use models::{
    CategoryQuery, CreateProduct, DeleteResponse, Product, ProductList, UpdateProduct,
};
pub use repository::ProductRepository;
pub use service::ProductService;

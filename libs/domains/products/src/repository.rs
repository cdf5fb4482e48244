use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// Implementations only move records in and out of a store. Writes are full
/// overwrites keyed by `id`; there is no partial update and no conditional
/// write, so a read-modify-write through this trait is last-write-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Write a new product, replacing any record with the same id
    async fn create(&self, product: &Product) -> ProductResult<()>;

    /// Point lookup; `Ok(None)` when the id does not exist
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// All active products, in store order
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// Active products whose category equals `category`
    async fn get_by_category(&self, category: &str) -> ProductResult<Vec<Product>>;

    /// Overwrite the full record
    async fn update(&self, product: &Product) -> ProductResult<()>;

    /// Remove the record; missing ids are not an error
    async fn delete(&self, id: &str) -> ProductResult<()>;
}

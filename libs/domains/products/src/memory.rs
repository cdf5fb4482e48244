//! In-memory implementation of ProductRepository
//!
//! Backs handler tests and local runs without a table. Clones share storage.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<String, Product>>>,
    failure: Option<String>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a persistence error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Store a record as-is, e.g. to seed inactive products
    pub async fn insert_raw(&self, product: Product) {
        self.products
            .write()
            .await
            .insert(product.id.clone(), product);
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }

    fn check(&self) -> ProductResult<()> {
        match &self.failure {
            Some(message) => Err(ProductError::persistence_msg(message.clone())),
            None => Ok(()),
        }
    }

    async fn scan<F>(&self, predicate: F) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
    {
        let mut products: Vec<Product> = self
            .products
            .read()
            .await
            .values()
            .filter(|p| predicate(p))
            .cloned()
            .collect();
        products.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        products
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> ProductResult<()> {
        self.check()?;
        self.insert_raw(product.clone()).await;
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        self.check()?;
        Ok(self.products.read().await.get(id).cloned())
    }

    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        self.check()?;
        Ok(self.scan(|p| p.is_active).await)
    }

    async fn get_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        self.check()?;
        Ok(self
            .scan(|p| p.is_active && p.category == category)
            .await)
    }

    async fn update(&self, product: &Product) -> ProductResult<()> {
        self.check()?;
        self.insert_raw(product.clone()).await;
        Ok(())
    }

    async fn delete(&self, id: &str) -> ProductResult<()> {
        self.check()?;
        self.products.write().await.remove(id);
        Ok(())
    }
}

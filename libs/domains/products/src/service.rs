//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::{info, instrument};
use validator::{Validate, ValidationErrors};

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service validates input, checks existence, and orchestrates repository
/// calls. Store failures are passed through unchanged, never retried.
///
/// Updates are read-modify-write without a version check: two concurrent
/// updates of the same product can lose one writer's changes.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and store a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| first_violation(&e, &CreateProduct::CHECK_ORDER))?;

        let product = Product::new(input);
        self.repository.create(&product).await?;

        info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    /// Get a product by ID, active or not
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        require_id(id)?;
        self.find(id).await
    }

    /// List all active products
    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.get_all().await
    }

    /// List active products in one category
    #[instrument(skip(self))]
    pub async fn get_products_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        if category.is_empty() {
            return Err(ProductError::InvalidInput(
                "category cannot be empty".to_string(),
            ));
        }
        self.repository.get_by_category(category).await
    }

    /// Apply a partial update to an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        require_id(id)?;
        let mut product = self.find(id).await?;

        input
            .validate()
            .map_err(|e| first_violation(&e, &UpdateProduct::CHECK_ORDER))?;

        product.apply_update(input);
        self.repository.update(&product).await?;

        info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    /// Delete an existing product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        require_id(id)?;
        self.find(id).await?;

        self.repository.delete(id).await?;

        info!(product_id = %id, "Product deleted");
        Ok(())
    }

    async fn find(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }
}

fn require_id(id: &str) -> ProductResult<()> {
    if id.is_empty() {
        return Err(ProductError::InvalidInput(
            "product ID cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Reduce validation errors to the message of the first failing field in `order`
fn first_violation(errors: &ValidationErrors, order: &[&str]) -> ProductError {
    let field_errors = errors.field_errors();

    let message = order
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .next()
        .map(|err| {
            err.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string())
        })
        .unwrap_or_else(|| errors.to_string());

    ProductError::InvalidInput(message)
}

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Product entity - one catalog item, stored as a single DynamoDB item keyed by `id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (UUID v4 string), immutable
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    /// Stock Keeping Unit; not required to be unique
    pub sku: String,
    pub stock: i32,
    /// Inactive products are hidden from listings but still readable by id
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "product name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(exclusive_min = 0.0, message = "product price must be greater than 0"))]
    pub price: f64,
    #[validate(length(min = 1, message = "product category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "product SKU is required"))]
    pub sku: String,
    #[validate(range(min = 0, message = "product stock cannot be negative"))]
    pub stock: i32,
}

impl CreateProduct {
    /// Field order used to pick the reported violation
    pub(crate) const CHECK_ORDER: [&'static str; 5] = ["name", "price", "category", "sku", "stock"];
}

/// DTO for updating an existing product
///
/// `None` leaves the field unchanged; `Some` replaces it, including with an
/// empty or zero value where the rules allow it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "product name cannot be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "product price must be greater than 0"))]
    pub price: Option<f64>,
    #[validate(length(min = 1, message = "product category cannot be empty"))]
    pub category: Option<String>,
    #[validate(length(min = 1, message = "product SKU cannot be empty"))]
    pub sku: Option<String>,
    #[validate(range(min = 0, message = "product stock cannot be negative"))]
    pub stock: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdateProduct {
    pub(crate) const CHECK_ORDER: [&'static str; 5] = ["price", "stock", "name", "category", "sku"];

    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Query parameters for listing products of one category
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CategoryQuery {
    /// Category to filter by (exact match)
    pub category: Option<String>,
}

/// Response body for product listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductList {
    pub products: Vec<Product>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category: Option<String>,
    pub count: usize,
}

impl ProductList {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            count: products.len(),
            products,
            category: None,
        }
    }

    pub fn for_category(products: Vec<Product>, category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::new(products)
        }
    }
}

/// Confirmation body returned by delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

impl Product {
    /// Build a new active product from a validated create request
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            sku: input.sku,
            stock: input.stock,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update in place
    ///
    /// Present fields overwrite, absent fields are kept. `updated_at` always
    /// moves forward, by at least one microsecond.
    pub fn apply_update(&mut self, input: UpdateProduct) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(description) = input.description {
            self.description = description;
        }
        if let Some(price) = input.price {
            self.price = price;
        }
        if let Some(category) = input.category {
            self.category = category;
        }
        if let Some(sku) = input.sku {
            self.sku = sku;
        }
        if let Some(stock) = input.stock {
            self.stock = stock;
        }
        if let Some(is_active) = input.is_active {
            self.is_active = is_active;
        }

        let floor = self.updated_at + TimeDelta::microseconds(1);
        self.updated_at = Utc::now().max(floor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> CreateProduct {
        CreateProduct {
            name: "Widget".to_string(),
            description: String::new(),
            price: 9.99,
            category: "tools".to_string(),
            sku: "W-1".to_string(),
            stock: 5,
        }
    }

    #[test]
    fn test_new_product_defaults() {
        let product = Product::new(widget());

        assert!(!product.id.is_empty());
        assert!(Uuid::parse_str(&product.id).is_ok());
        assert!(product.is_active);
        assert_eq!(product.created_at, product.updated_at);
        assert_eq!(product.price, 9.99);
        assert_eq!(product.stock, 5);
    }

    #[test]
    fn test_new_product_ids_are_unique() {
        let a = Product::new(widget());
        let b = Product::new(widget());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_update_only_touches_present_fields() {
        let mut product = Product::new(widget());
        let before = product.clone();

        product.apply_update(UpdateProduct {
            price: Some(12.50),
            ..Default::default()
        });

        assert_eq!(product.price, 12.50);
        assert_eq!(product.id, before.id);
        assert_eq!(product.name, before.name);
        assert_eq!(product.description, before.description);
        assert_eq!(product.category, before.category);
        assert_eq!(product.sku, before.sku);
        assert_eq!(product.stock, before.stock);
        assert_eq!(product.is_active, before.is_active);
        assert_eq!(product.created_at, before.created_at);
        assert!(product.updated_at > before.updated_at);
    }

    #[test]
    fn test_apply_empty_update_still_advances_timestamp() {
        let mut product = Product::new(widget());
        let mut last = product.updated_at;

        for _ in 0..5 {
            product.apply_update(UpdateProduct::default());
            assert!(product.updated_at > last);
            last = product.updated_at;
        }
        assert!(product.updated_at >= product.created_at);
    }

    #[test]
    fn test_apply_update_can_clear_description_and_deactivate() {
        let mut product = Product::new(CreateProduct {
            description: "shiny".to_string(),
            ..widget()
        });

        product.apply_update(UpdateProduct {
            description: Some(String::new()),
            stock: Some(0),
            is_active: Some(false),
            ..Default::default()
        });

        assert_eq!(product.description, "");
        assert_eq!(product.stock, 0);
        assert!(!product.is_active);
    }

    #[test]
    fn test_create_validation_rules() {
        assert!(widget().validate().is_ok());

        let cases = [
            CreateProduct { name: String::new(), ..widget() },
            CreateProduct { price: 0.0, ..widget() },
            CreateProduct { price: -1.0, ..widget() },
            CreateProduct { category: String::new(), ..widget() },
            CreateProduct { sku: String::new(), ..widget() },
            CreateProduct { stock: -1, ..widget() },
        ];
        for input in cases {
            assert!(input.validate().is_err(), "expected violation for {input:?}");
        }
    }

    #[test]
    fn test_update_validation_ignores_absent_fields() {
        assert!(UpdateProduct::default().validate().is_ok());
        assert!(
            UpdateProduct {
                description: Some(String::new()),
                stock: Some(0),
                ..Default::default()
            }
            .validate()
            .is_ok()
        );
        assert!(
            UpdateProduct {
                sku: Some(String::new()),
                ..Default::default()
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn test_create_product_description_defaults_to_empty() {
        let input: CreateProduct = serde_json::from_value(serde_json::json!({
            "name": "Widget",
            "price": 9.99,
            "category": "tools",
            "sku": "W-1",
            "stock": 5
        }))
        .unwrap();
        assert_eq!(input.description, "");
    }

    #[test]
    fn test_update_product_absent_vs_present() {
        let input: UpdateProduct =
            serde_json::from_value(serde_json::json!({ "name": "", "is_active": false })).unwrap();
        assert_eq!(input.name.as_deref(), Some(""));
        assert_eq!(input.is_active, Some(false));
        assert!(input.price.is_none());
        assert!(!input.is_empty());
    }

    #[test]
    fn test_product_json_field_names() {
        let json = serde_json::to_value(Product::new(widget())).unwrap();
        for key in [
            "id",
            "name",
            "description",
            "price",
            "category",
            "sku",
            "stock",
            "is_active",
            "created_at",
            "updated_at",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_product_list_counts() {
        let list = ProductList::for_category(vec![Product::new(widget())], "tools");
        assert_eq!(list.count, 1);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["category"], "tools");

        let json = serde_json::to_value(ProductList::new(vec![])).unwrap();
        assert_eq!(json["count"], 0);
        assert!(json.get("category").is_none());
    }
}

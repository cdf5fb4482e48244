//! DynamoDB implementation of ProductRepository

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

type Item = HashMap<String, AttributeValue>;

/// DynamoDB implementation of the ProductRepository
///
/// Items are keyed by the string attribute `id`. Scans use filter expressions
/// and follow `LastEvaluatedKey` until the table is exhausted.
#[derive(Clone)]
pub struct DynamoProductRepository {
    client: Client,
    table_name: String,
}

impl DynamoProductRepository {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    async fn put(&self, product: &Product, action: &str) -> ProductResult<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(product)))
            .send()
            .await
            .map_err(|e| {
                ProductError::persistence(
                    format!("failed to {action} product"),
                    aws_sdk_dynamodb::Error::from(e),
                )
            })?;
        Ok(())
    }

    async fn scan(&self, filter: ScanFilter, context: &str) -> ProductResult<Vec<Product>> {
        let mut items = self
            .client
            .scan()
            .table_name(&self.table_name)
            .filter_expression(filter.expression)
            .set_expression_attribute_names(Some(filter.names))
            .set_expression_attribute_values(Some(filter.values))
            .into_paginator()
            .items()
            .send();

        let mut products = Vec::new();
        while let Some(item) = items.next().await {
            let item = item.map_err(|e| {
                ProductError::persistence(context, aws_sdk_dynamodb::Error::from(e))
            })?;
            products.push(from_item(&item)?);
        }

        debug!(count = products.len(), "Scan completed");
        Ok(products)
    }
}

/// Filter expression plus its placeholder bindings for a Scan request.
///
/// Attribute names go through `#` placeholders so reserved words never
/// collide with the expression grammar.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScanFilter {
    pub(crate) expression: &'static str,
    pub(crate) names: HashMap<String, String>,
    pub(crate) values: Item,
}

impl ScanFilter {
    /// Active products only
    pub(crate) fn active() -> Self {
        Self {
            expression: "#is_active = :active",
            names: HashMap::from([("#is_active".to_string(), "is_active".to_string())]),
            values: HashMap::from([(":active".to_string(), AttributeValue::Bool(true))]),
        }
    }

    /// Active products whose category equals `category` exactly
    pub(crate) fn active_in_category(category: &str) -> Self {
        Self {
            expression: "#category = :category AND #is_active = :active",
            names: HashMap::from([
                ("#category".to_string(), "category".to_string()),
                ("#is_active".to_string(), "is_active".to_string()),
            ]),
            values: HashMap::from([
                (":category".to_string(), AttributeValue::S(category.to_string())),
                (":active".to_string(), AttributeValue::Bool(true)),
            ]),
        }
    }
}

#[async_trait]
impl ProductRepository for DynamoProductRepository {
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn create(&self, product: &Product) -> ProductResult<()> {
        self.put(product, "create").await
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| {
                ProductError::persistence("failed to get product", aws_sdk_dynamodb::Error::from(e))
            })?;

        output.item().map(from_item).transpose()
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        self.scan(ScanFilter::active(), "failed to scan products")
            .await
    }

    #[instrument(skip(self))]
    async fn get_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        self.scan(
            ScanFilter::active_in_category(category),
            "failed to scan products by category",
        )
        .await
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn update(&self, product: &Product) -> ProductResult<()> {
        self.put(product, "update").await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> ProductResult<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| {
                ProductError::persistence(
                    "failed to delete product",
                    aws_sdk_dynamodb::Error::from(e),
                )
            })?;
        Ok(())
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Serialize a product into its attribute map
pub(crate) fn to_item(product: &Product) -> Item {
    HashMap::from([
        ("id".to_string(), AttributeValue::S(product.id.clone())),
        ("name".to_string(), AttributeValue::S(product.name.clone())),
        (
            "description".to_string(),
            AttributeValue::S(product.description.clone()),
        ),
        ("price".to_string(), AttributeValue::N(product.price.to_string())),
        (
            "category".to_string(),
            AttributeValue::S(product.category.clone()),
        ),
        ("sku".to_string(), AttributeValue::S(product.sku.clone())),
        ("stock".to_string(), AttributeValue::N(product.stock.to_string())),
        ("is_active".to_string(), AttributeValue::Bool(product.is_active)),
        (
            "created_at".to_string(),
            AttributeValue::S(format_timestamp(&product.created_at)),
        ),
        (
            "updated_at".to_string(),
            AttributeValue::S(format_timestamp(&product.updated_at)),
        ),
    ])
}

fn malformed(key: &str, detail: impl std::fmt::Display) -> ProductError {
    ProductError::persistence_msg(format!(
        "failed to unmarshal product: attribute '{key}' {detail}"
    ))
}

fn attr<'a>(item: &'a Item, key: &str) -> ProductResult<&'a AttributeValue> {
    item.get(key).ok_or_else(|| malformed(key, "is missing"))
}

fn string_attr(item: &Item, key: &str) -> ProductResult<String> {
    attr(item, key)?
        .as_s()
        .cloned()
        .map_err(|_| malformed(key, "is not a string"))
}

fn number_attr<T>(item: &Item, key: &str) -> ProductResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    attr(item, key)?
        .as_n()
        .map_err(|_| malformed(key, "is not a number"))?
        .parse()
        .map_err(|e: T::Err| malformed(key, e))
}

fn bool_attr(item: &Item, key: &str) -> ProductResult<bool> {
    attr(item, key)?
        .as_bool()
        .copied()
        .map_err(|_| malformed(key, "is not a boolean"))
}

fn timestamp_attr(item: &Item, key: &str) -> ProductResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&string_attr(item, key)?)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| malformed(key, e))
}

/// Deserialize an attribute map; a missing `description` reads as empty
pub(crate) fn from_item(item: &Item) -> ProductResult<Product> {
    let description = match item.get("description") {
        Some(_) => string_attr(item, "description")?,
        None => String::new(),
    };

    Ok(Product {
        id: string_attr(item, "id")?,
        name: string_attr(item, "name")?,
        description,
        price: number_attr(item, "price")?,
        category: string_attr(item, "category")?,
        sku: string_attr(item, "sku")?,
        stock: number_attr(item, "stock")?,
        is_active: bool_attr(item, "is_active")?,
        created_at: timestamp_attr(item, "created_at")?,
        updated_at: timestamp_attr(item, "updated_at")?,
    })
}

//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, JsonBody, QueryParams,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{
    CategoryQuery, CreateProduct, DeleteResponse, Product, ProductList, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_by_category,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct, ProductList, DeleteResponse),
        responses(NotFoundResponse, BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/category", get(get_by_category))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List all active products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "Active products", body = ProductList),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> Result<Json<ProductList>, AppError> {
    let products = service.get_all_products().await?;
    Ok(Json(ProductList::new(products)))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(input): JsonBody<CreateProduct>,
) -> Result<impl IntoResponse, AppError> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// List active products in a category
#[utoipa::path(
    get,
    path = "/category",
    tag = "Products",
    params(CategoryQuery),
    responses(
        (status = 200, description = "Active products in the category", body = ProductList),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_by_category<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(query): QueryParams<CategoryQuery>,
) -> Result<Json<ProductList>, AppError> {
    let category = query.category.unwrap_or_default();
    let products = service.get_products_by_category(&category).await?;
    Ok(Json(ProductList::for_category(products, category)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// Update a product; omitted fields are left unchanged
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateProduct>,
) -> Result<Json<Product>, AppError> {
    let product = service.update_product(&id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = DeleteResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    service.delete_product(&id).await?;
    Ok(Json(DeleteResponse {
        message: "Product deleted successfully".to_string(),
    }))
}

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use svckit::{Problem, ValidationViolation};
use utoipa::OpenApi;

use super::dto::{ProductDto, ProductReq};
use super::handlers;
use crate::domain::service::ProductsService;

#[derive(OpenApi)]
#[openapi(
    info(title = "Product Service API", description = "CRUD operations over the product catalog"),
    paths(
        handlers::create_product,
        handlers::list_products,
        handlers::get_product,
        handlers::update_product,
        handlers::delete_product,
    ),
    components(schemas(ProductDto, ProductReq, Problem, ValidationViolation)),
    tags((name = "products", description = "Product catalog"))
)]
pub struct ApiDoc;

#[must_use]
pub fn router(service: Arc<ProductsService>) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/api/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .layer(Extension(service))
}

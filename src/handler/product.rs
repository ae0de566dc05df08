use crate::{
    abstract_trait::DynProductService,
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::HttpError,
    middleware::{jwt::auth_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List all products", body = ApiResponse<Vec<ProductResponse>>)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Product"
)]
pub async fn get_products(
    Extension(service): Extension<DynProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Get product by id", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Product"
)]
pub async fn get_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Create product", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation failed")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Product"
)]
pub async fn create_product(
    Extension(service): Extension<DynProductService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Update product", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Product"
)]
pub async fn update_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.product_id = id;

    let response = service.update_product(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Delete product", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Product not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Product"
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products", post(create_product))
        .route("/api/products/{id}", get(get_product))
        .route("/api/products/{id}", put(update_product))
        .route("/api/products/{id}", delete(delete_product))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.product_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}

use crate::{
    abstract_trait::DynCustomerService,
    domain::{
        requests::customer::UpdateCustomerRequest,
        responses::{ApiResponse, CustomerResponse},
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
    routing::{delete, get, put},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/customers",
    responses(
        (status = 200, description = "List all customers", body = ApiResponse<Vec<CustomerResponse>>)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Customer"
)]
pub async fn get_customers(
    Extension(service): Extension<DynCustomerService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(
        ("id" = i32, Path, description = "Customer id")
    ),
    responses(
        (status = 200, description = "Get customer by id", body = ApiResponse<CustomerResponse>),
        (status = 404, description = "Customer not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Customer"
)]
pub async fn get_customer(
    Extension(service): Extension<DynCustomerService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    params(
        ("id" = i32, Path, description = "Customer id")
    ),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Update customer", body = ApiResponse<CustomerResponse>),
        (status = 404, description = "Customer not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Customer"
)]
pub async fn update_customer(
    Extension(service): Extension<DynCustomerService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateCustomerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.customer_id = id;

    let response = service.update_customer(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    params(
        ("id" = i32, Path, description = "Customer id")
    ),
    responses(
        (status = 200, description = "Delete customer", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Customer not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Customer"
)]
pub async fn delete_customer(
    Extension(service): Extension<DynCustomerService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_customer(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn customer_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/customers", get(get_customers))
        .route("/api/customers/{id}", get(get_customer))
        .route("/api/customers/{id}", put(update_customer))
        .route("/api/customers/{id}", delete(delete_customer))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.customer_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}

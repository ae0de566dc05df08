use crate::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::order::{CreateOrderRequest, FindAllOrders, UpdateOrderRequest},
        responses::{ApiResponse, OrderResponse},
    },
    errors::HttpError,
    middleware::{jwt::auth_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/orders",
    params(FindAllOrders),
    responses(
        (status = 200, description = "List orders, optionally filtered by customer name or product names", body = ApiResponse<Vec<OrderResponse>>)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Order"
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Query(filter): Query<FindAllOrders>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&filter).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Get order by id", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Order"
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Create order with its items", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Business rule or validation failure")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Order"
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order id")
    ),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Update order, replacing its item set", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Order"
)]
pub async fn update_order(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.order_id = id;

    let response = service.update_order(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Delete order and its items", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Order not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Order"
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_order(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", get(get_orders))
        .route("/api/orders", post(create_order))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}", put(update_order))
        .route("/api/orders/{id}", delete(delete_order))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_query_service.clone()))
        .layer(Extension(
            app_state.di_container.order_command_service.clone(),
        ))
        .layer(Extension(app_state.jwt_config.clone()))
}

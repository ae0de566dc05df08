use crate::{
    abstract_trait::DynAuthService,
    domain::{
        requests::auth::{ChangePasswordRequest, LoginRequest, RegisterRequest},
        responses::{ApiResponse, CustomerResponse, TokenResponse},
    },
    errors::HttpError,
    middleware::{jwt::auth_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

pub async fn health_checker_handler() -> Result<impl IntoResponse, HttpError> {
    const MESSAGE: &str = "Order management API in Rust using Axum, Postgres, and SQLX";

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "success",
            "message": MESSAGE
        })),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Profile created", body = ApiResponse<CustomerResponse>),
        (status = 400, description = "Validation failed")
    ),
    tag = "Auth"
)]
pub async fn register_customer_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<TokenResponse>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login_customer_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Get Me customer", body = ApiResponse<CustomerResponse>)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Auth",
)]
pub async fn get_me_handler(
    Extension(service): Extension<DynAuthService>,
    Extension(customer_id): Extension<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_me(customer_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/change-password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Old password mismatch or weak password")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Auth",
)]
pub async fn change_password_handler(
    Extension(service): Extension<DynAuthService>,
    Extension(customer_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<ChangePasswordRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.change_password(customer_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/auth/register", post(register_customer_handler))
        .route("/api/auth/login", post(login_customer_handler))
        .route("/api/healthchecker", get(health_checker_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()));

    let private_routes = OpenApiRouter::new()
        .route("/api/auth/me", get(get_me_handler))
        .route("/api/auth/change-password", post(change_password_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.auth_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(private_routes)
}

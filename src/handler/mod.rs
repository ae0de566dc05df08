mod auth;
mod customer;
mod order;
mod product;

use crate::state::AppState;
use crate::utils::shutdown_signal;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::customer::customer_routes;
pub use self::order::order_routes;
pub use self::product::product_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register_customer_handler,
        auth::login_customer_handler,
        auth::get_me_handler,
        auth::change_password_handler,

        customer::get_customers,
        customer::get_customer,
        customer::update_customer,
        customer::delete_customer,

        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        order::get_orders,
        order::get_order,
        order::create_order,
        order::update_order,
        order::delete_order,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Customer", description = "Customer endpoints"),
        (name = "Product", description = "Product endpoints"),
        (name = "Order", description = "Order endpoints"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(utoipa::openapi::security::Http::new(
                    utoipa::openapi::security::HttpAuthScheme::Bearer,
                )),
            );
        }
    }
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(auth_routes(shared_state.clone()))
            .merge(customer_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app =
            app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

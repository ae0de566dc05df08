mod api;
mod customer;
mod order;
mod product;
mod token;

pub use self::api::ApiResponse;
pub use self::customer::CustomerResponse;
pub use self::order::{OrderItemResponse, OrderResponse};
pub use self::product::ProductResponse;
pub use self::token::TokenResponse;

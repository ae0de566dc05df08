mod auth;
mod customer;
mod order;
mod product;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::customer::CustomerService;
pub use self::order::{OrderCommandService, OrderQueryService, rules};
pub use self::product::ProductService;

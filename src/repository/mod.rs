mod customer;
mod order;
mod product;

pub use self::customer::{CustomerCommandRepository, CustomerQueryRepository};
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::product::{ProductCommandRepository, ProductQueryRepository};

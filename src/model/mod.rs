pub mod customer;
pub mod order;
pub mod order_item;
pub mod product;

pub use self::customer::Customer;
pub use self::order::{Order, OrderWithItems};
pub use self::order_item::{OrderItem, OrderItemDetail};
pub use self::product::Product;

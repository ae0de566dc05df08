mod gracefullshutdown;
mod logs;
mod order_number;
mod password;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::order_number::{FIRST_ORDER_NUMBER, next_order_number};
pub use self::password::validate_password;

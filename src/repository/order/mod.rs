mod command;
mod query;

pub use self::command::OrderCommandRepository;
pub use self::query::OrderQueryRepository;

pub(crate) const SELECT_COLUMNS: &str =
    "order_id, order_number, customer_id, order_date, address, created_at, updated_at";

mod command;
mod query;
pub mod rules;

pub use self::command::OrderCommandService;
pub use self::query::OrderQueryService;

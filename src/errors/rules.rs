use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// A single order-level business rule violation. Rules are evaluated
/// independently so callers receive every violation, not just the first.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderRuleViolation {
    #[error("order date {0} cannot be in the past")]
    DateInPast(NaiveDate),

    #[error("order cumulative weight {total} exceeds the limit of {limit}")]
    WeightExceeded { total: Decimal, limit: Decimal },
}

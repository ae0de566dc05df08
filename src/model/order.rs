use crate::model::order_item::OrderItemDetail;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub order_number: String,
    pub customer_id: i32,
    pub order_date: NaiveDate,
    pub address: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// An order together with its full item set, read as one consistency unit.
#[derive(Debug, Clone)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItemDetail>,
}

impl OrderWithItems {
    /// Total price computed from the product prices at read time; never stored.
    pub fn total_price(&self) -> i64 {
        self.items
            .iter()
            .map(|item| i64::from(item.price) * i64::from(item.quantity))
            .sum()
    }
}

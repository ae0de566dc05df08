use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub order_item_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

/// Item row joined with its product for read paths. Price and weight come
/// from the product at the moment of the read.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItemDetail {
    pub order_item_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub price: i32,
    pub weight: Decimal,
    pub quantity: i32,
}

use crate::model::{OrderItemDetail, OrderWithItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub id: i32,
    #[serde(rename = "product_id")]
    pub product_id: i32,
    #[serde(rename = "product_name")]
    pub product_name: String,
    pub price: i32,
    pub quantity: i32,
}

impl From<OrderItemDetail> for OrderItemResponse {
    fn from(value: OrderItemDetail) -> Self {
        OrderItemResponse {
            id: value.order_item_id,
            product_id: value.product_id,
            product_name: value.product_name,
            price: value.price,
            quantity: value.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    #[serde(rename = "order_number")]
    pub order_number: String,
    #[serde(rename = "customer_id")]
    pub customer_id: i32,
    #[serde(rename = "order_date")]
    pub order_date: NaiveDate,
    pub address: String,
    #[serde(rename = "order_items")]
    pub order_items: Vec<OrderItemResponse>,
    #[serde(rename = "total_price")]
    pub total_price: i64,
}

impl From<OrderWithItems> for OrderResponse {
    fn from(value: OrderWithItems) -> Self {
        let total_price = value.total_price();
        let OrderWithItems { order, items } = value;

        OrderResponse {
            id: order.order_id,
            order_number: order.order_number,
            customer_id: order.customer_id,
            order_date: order.order_date,
            address: order.address,
            order_items: items.into_iter().map(OrderItemResponse::from).collect(),
            total_price,
        }
    }
}

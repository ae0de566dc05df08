use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, IntoParams, Clone, Default)]
pub struct FindAllOrders {
    /// Comma-separated product names; orders containing any of them match.
    pub products: Option<String>,

    /// Exact customer name.
    pub customer: Option<String>,
}

impl FindAllOrders {
    /// Splits the comma-separated product filter into trimmed names. A
    /// missing, empty, or all-whitespace parameter means no filter at all,
    /// never a filter that matches nothing.
    pub fn product_names(&self) -> Option<Vec<String>> {
        let names: Vec<String> = self
            .products
            .as_deref()?
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() { None } else { Some(names) }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateOrderItemRequest {
    #[validate(range(min = 1))]
    #[serde(rename = "product_id")]
    pub product_id: i32,

    #[validate(range(min = 1))]
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateOrderRequest {
    #[validate(range(min = 1))]
    #[serde(rename = "customer_id")]
    pub customer_id: i32,

    #[serde(rename = "order_date")]
    pub order_date: NaiveDate,

    #[validate(length(min = 1, max = 255))]
    pub address: String,

    #[validate(length(min = 1), nested)]
    pub items: Vec<CreateOrderItemRequest>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateOrderRequest {
    #[serde(default)]
    #[serde(rename = "order_id")]
    pub order_id: i32,

    #[serde(rename = "order_date")]
    pub order_date: NaiveDate,

    #[validate(length(min = 1, max = 255))]
    pub address: String,

    #[validate(length(min = 1), nested)]
    pub items: Vec<CreateOrderItemRequest>,
}

/// Line item as persisted; quantities already validated upstream.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderItemRecord {
    pub product_id: i32,
    pub quantity: i32,
}

/// Insert payload handed to the aggregate repository once the business rules
/// have passed. The order number is assigned inside the repository.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateOrderRecordRequest {
    pub customer_id: i32,
    pub order_date: NaiveDate,
    pub address: String,
    pub items: Vec<OrderItemRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateOrderRecordRequest {
    pub order_id: i32,
    pub order_date: NaiveDate,
    pub address: String,
    pub items: Vec<OrderItemRecord>,
}

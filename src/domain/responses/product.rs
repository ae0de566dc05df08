use crate::model::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub weight: Decimal,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.product_id,
            name: value.name,
            price: value.price,
            weight: value.weight,
        }
    }
}

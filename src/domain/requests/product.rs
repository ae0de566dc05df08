use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(range(min = 0))]
    pub price: i32,

    pub weight: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateProductRequest {
    #[serde(default)]
    #[serde(rename = "product_id")]
    pub product_id: i32,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(range(min = 0))]
    pub price: i32,

    pub weight: Decimal,
}

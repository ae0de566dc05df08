use crate::model::Customer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The password hash never leaves the model layer.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(rename = "contact_number")]
    pub contact_number: String,
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        CustomerResponse {
            id: value.customer_id,
            name: value.name,
            email: value.email,
            contact_number: value.contact_number,
        }
    }
}

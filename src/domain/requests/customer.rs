use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Insert payload built by the auth service after hashing the password.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateCustomerRecordRequest {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 20))]
    #[serde(rename = "contact_number")]
    pub contact_number: String,

    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateCustomerRequest {
    #[serde(default)]
    #[serde(rename = "customer_id")]
    pub customer_id: i32,

    #[validate(length(min = 1))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 20))]
    #[serde(rename = "contact_number")]
    pub contact_number: String,
}

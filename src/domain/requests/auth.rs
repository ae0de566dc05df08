use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 20))]
    #[serde(rename = "contact_number")]
    pub contact_number: String,

    #[validate(length(min = 8))]
    pub password: String,

    #[serde(rename = "confirm_password")]
    pub confirm_password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "old_password")]
    pub old_password: String,

    #[validate(length(min = 8))]
    #[serde(rename = "new_password")]
    pub new_password: String,

    #[serde(rename = "confirm_password")]
    pub confirm_password: String,
}

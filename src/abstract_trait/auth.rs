use crate::{
    domain::requests::auth::{ChangePasswordRequest, LoginRequest, RegisterRequest},
    domain::responses::{ApiResponse, CustomerResponse, TokenResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError>;
    async fn get_me(&self, customer_id: i32)
    -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn change_password(
        &self,
        customer_id: i32,
        req: &ChangePasswordRequest,
    ) -> Result<ApiResponse<()>, ServiceError>;
}

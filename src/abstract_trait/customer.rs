use crate::{
    domain::requests::customer::{CreateCustomerRecordRequest, UpdateCustomerRequest},
    domain::responses::{ApiResponse, CustomerResponse},
    errors::{RepositoryError, ServiceError},
    model::Customer,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCustomerQueryRepository = Arc<dyn CustomerQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CustomerQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, RepositoryError>;
    /// Case-insensitive existence check on the customer name.
    async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError>;
    async fn exists_by_contact_number(&self, contact_number: &str)
    -> Result<bool, RepositoryError>;
}

pub type DynCustomerCommandRepository = Arc<dyn CustomerCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CustomerCommandRepositoryTrait {
    async fn create_customer(
        &self,
        req: &CreateCustomerRecordRequest,
    ) -> Result<Customer, RepositoryError>;
    async fn update_customer(&self, req: &UpdateCustomerRequest)
    -> Result<Customer, RepositoryError>;
    async fn update_password(&self, id: i32, password: &str) -> Result<(), RepositoryError>;
    async fn delete_customer(&self, id: i32) -> Result<(), RepositoryError>;
}

pub type DynCustomerService = Arc<dyn CustomerServiceTrait + Send + Sync>;

#[async_trait]
pub trait CustomerServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CustomerResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn update_customer(
        &self,
        req: &UpdateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn delete_customer(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}

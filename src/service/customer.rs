use crate::{
    abstract_trait::{
        CustomerServiceTrait, DynCustomerCommandRepository, DynCustomerQueryRepository,
    },
    domain::{
        requests::customer::UpdateCustomerRequest,
        responses::{ApiResponse, CustomerResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct CustomerService {
    query: DynCustomerQueryRepository,
    command: DynCustomerCommandRepository,
}

impl CustomerService {
    pub fn new(query: DynCustomerQueryRepository, command: DynCustomerCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl CustomerServiceTrait for CustomerService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CustomerResponse>>, ServiceError> {
        let customers = self.query.find_all().await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "success".into(),
            data: customers.into_iter().map(CustomerResponse::from).collect(),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        let customer = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "success".into(),
            data: CustomerResponse::from(customer),
        })
    }

    async fn update_customer(
        &self,
        req: &UpdateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        info!("✏️ Updating customer ID={}", req.customer_id);

        let mut normalized = req.clone();
        normalized.email = normalized.email.to_lowercase();

        let customer = self.command.update_customer(&normalized).await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Profile Updated".into(),
            data: CustomerResponse::from(customer),
        })
    }

    async fn delete_customer(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        self.command.delete_customer(id).await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Profile Deleted".into(),
            data: (),
        })
    }
}

use crate::{
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    domain::responses::{ApiResponse, ProductResponse},
    errors::{RepositoryError, ServiceError},
    model::Product,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Product>, RepositoryError>;
    /// Case-insensitive existence check, optionally excluding one product id
    /// so updates do not collide with the row being edited.
    async fn exists_by_name(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, RepositoryError>;
}

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, req: &CreateProductRequest)
    -> Result<Product, RepositoryError>;
    async fn update_product(&self, req: &UpdateProductRequest)
    -> Result<Product, RepositoryError>;
    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError>;
}

pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn delete_product(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}

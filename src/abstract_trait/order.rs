use crate::{
    domain::requests::order::{
        CreateOrderRecordRequest, CreateOrderRequest, FindAllOrders, UpdateOrderRecordRequest,
        UpdateOrderRequest,
    },
    domain::responses::{ApiResponse, OrderResponse},
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderItemDetail, OrderWithItems},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self, filter: &FindAllOrders) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError>;
    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItemDetail>, RepositoryError>;
    /// Order plus its full item set, with per-item product price and weight
    /// read at call time.
    async fn find_with_items(&self, id: i32) -> Result<OrderWithItems, RepositoryError>;
}

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Persists the order and every item as one transaction, assigning the
    /// next sequential order number at the moment of insertion.
    async fn create_order(&self, req: &CreateOrderRecordRequest)
    -> Result<Order, RepositoryError>;
    /// Replaces the full item set and applies field updates atomically.
    async fn update_order(&self, req: &UpdateOrderRecordRequest)
    -> Result<Order, RepositoryError>;
    async fn delete_order(&self, id: i32) -> Result<(), RepositoryError>;
}

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(
        &self,
        filter: &FindAllOrders,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_order(
        &self,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn delete_order(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}

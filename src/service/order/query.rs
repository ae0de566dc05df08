use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::{
        requests::order::FindAllOrders,
        responses::{ApiResponse, OrderResponse},
    },
    errors::ServiceError,
    model::OrderWithItems,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        filter: &FindAllOrders,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        info!("🔍 Fetching orders");

        let orders = self.query.find_all(filter).await?;

        let mut responses = Vec::with_capacity(orders.len());
        for order in orders {
            let items = self.query.find_items(order.order_id).await?;
            responses.push(OrderResponse::from(OrderWithItems { order, items }));
        }

        Ok(ApiResponse {
            status: "success".into(),
            message: "success".into(),
            data: responses,
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🔍 Fetching order ID={id}");

        let aggregate = self.query.find_with_items(id).await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "success".into(),
            data: OrderResponse::from(aggregate),
        })
    }
}

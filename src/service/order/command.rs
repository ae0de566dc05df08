use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, DynProductQueryRepository,
        OrderCommandServiceTrait,
    },
    domain::{
        requests::order::{
            CreateOrderRecordRequest, CreateOrderRequest, OrderItemRecord,
            UpdateOrderRecordRequest, UpdateOrderRequest,
        },
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Product,
    service::order::rules,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::info;

#[derive(Clone)]
pub struct OrderCommandService {
    product_query: DynProductQueryRepository,
    command: DynOrderCommandRepository,
    query: DynOrderQueryRepository,
}

impl OrderCommandService {
    pub fn new(
        product_query: DynProductQueryRepository,
        command: DynOrderCommandRepository,
        query: DynOrderQueryRepository,
    ) -> Self {
        Self {
            product_query,
            command,
            query,
        }
    }

    /// Resolves every referenced product and pairs it with its quantity.
    /// A missing product surfaces before anything touches the orders table.
    async fn resolve_items(
        &self,
        items: &[crate::domain::requests::order::CreateOrderItemRequest],
    ) -> Result<Vec<(Product, i32)>, ServiceError> {
        let ids: Vec<i32> = items.iter().map(|item| item.product_id).collect();
        let products = self.product_query.find_by_ids(&ids).await?;

        let by_id: HashMap<i32, Product> = products
            .into_iter()
            .map(|product| (product.product_id, product))
            .collect();

        let mut resolved = Vec::with_capacity(items.len());
        for item in items {
            let product = by_id.get(&item.product_id).ok_or(ServiceError::Repo(
                RepositoryError::ProductNotFound(item.product_id),
            ))?;
            resolved.push((product.clone(), item.quantity));
        }

        Ok(resolved)
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🏗️ Creating new order for customer_id={}", req.customer_id);

        if req.items.is_empty() {
            return Err(ServiceError::Validation(vec![
                "Order must contain at least one item.".into(),
            ]));
        }

        let resolved = self.resolve_items(&req.items).await?;

        rules::validate_order(req.order_date, &resolved).map_err(ServiceError::OrderRules)?;

        let records: Vec<OrderItemRecord> = req
            .items
            .iter()
            .map(|item| OrderItemRecord {
                product_id: item.product_id,
                quantity: item.quantity,
            })
            .collect();

        let order = self
            .command
            .create_order(&CreateOrderRecordRequest {
                customer_id: req.customer_id,
                order_date: req.order_date,
                address: req.address.clone(),
                items: records,
            })
            .await
            .map_err(ServiceError::Repo)?;

        let aggregate = self
            .query
            .find_with_items(order.order_id)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Order created successfully".into(),
            data: OrderResponse::from(aggregate),
        })
    }

    async fn update_order(
        &self,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("✏️ Updating order ID={}", req.order_id);

        if req.items.is_empty() {
            return Err(ServiceError::Validation(vec![
                "Order must contain at least one item.".into(),
            ]));
        }

        // Rules run against the proposed replacement set, not the stored one.
        let resolved = self.resolve_items(&req.items).await?;

        rules::validate_order(req.order_date, &resolved).map_err(ServiceError::OrderRules)?;

        let records: Vec<OrderItemRecord> = req
            .items
            .iter()
            .map(|item| OrderItemRecord {
                product_id: item.product_id,
                quantity: item.quantity,
            })
            .collect();

        let order = self
            .command
            .update_order(&UpdateOrderRecordRequest {
                order_id: req.order_id,
                order_date: req.order_date,
                address: req.address.clone(),
                items: records,
            })
            .await
            .map_err(ServiceError::Repo)?;

        let aggregate = self
            .query
            .find_with_items(order.order_id)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Order updated successfully".into(),
            data: OrderResponse::from(aggregate),
        })
    }

    async fn delete_order(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("💀 Deleting order with ID: {id}");

        self.command
            .delete_order(id)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Order deleted successfully".into(),
            data: (),
        })
    }
}

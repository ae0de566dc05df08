use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::order::FindAllOrders,
    errors::RepositoryError,
    model::{Order, OrderItemDetail, OrderWithItems},
};
use async_trait::async_trait;

use super::SELECT_COLUMNS;

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self, filter: &FindAllOrders) -> Result<Vec<Order>, RepositoryError> {
        let product_names = filter.product_names();

        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT o.order_id, o.order_number, o.customer_id, o.order_date, o.address,
                   o.created_at, o.updated_at
            FROM orders o
            JOIN customers c ON c.customer_id = o.customer_id
            WHERE ($1::text IS NULL OR c.name = $1)
              AND ($2::text[] IS NULL OR EXISTS (
                    SELECT 1
                    FROM order_items oi
                    JOIN products p ON p.product_id = oi.product_id
                    WHERE oi.order_id = o.order_id AND p.name = ANY($2)
              ))
            ORDER BY o.order_id
            "#,
        )
        .bind(filter.customer.as_deref())
        .bind(product_names)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(orders)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {SELECT_COLUMNS} FROM orders WHERE order_id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(order)
    }

    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItemDetail>, RepositoryError> {
        let items = sqlx::query_as::<_, OrderItemDetail>(
            r#"
            SELECT oi.order_item_id, oi.product_id, p.name AS product_name,
                   p.price, p.weight, oi.quantity
            FROM order_items oi
            JOIN products p ON p.product_id = oi.product_id
            WHERE oi.order_id = $1
            ORDER BY oi.order_item_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(items)
    }

    async fn find_with_items(&self, id: i32) -> Result<OrderWithItems, RepositoryError> {
        let order = self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)?;
        let items = self.find_items(id).await?;

        Ok(OrderWithItems { order, items })
    }
}

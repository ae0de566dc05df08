use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::order::{
        CreateOrderRecordRequest, OrderItemRecord, UpdateOrderRecordRequest,
    },
    errors::RepositoryError,
    model::Order,
    utils::next_order_number,
};
use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use std::future::Future;
use tracing::{error, info, warn};

use super::SELECT_COLUMNS;

const ORDER_NUMBER_CONSTRAINT: &str = "orders_order_number_key";
const PRODUCT_FK_CONSTRAINT: &str = "order_items_product_id_fkey";

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    /// One attempt at the create transaction: read the last order number,
    /// derive the next, insert the order and all of its items. Any failure
    /// rolls the whole transaction back.
    async fn try_create_order(
        &self,
        req: &CreateOrderRecordRequest,
    ) -> Result<Order, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // Last order by insertion order, not by lexical order_number.
        let last = sqlx::query_scalar::<_, String>(
            "SELECT order_number FROM orders ORDER BY order_id DESC LIMIT 1",
        )
        .fetch_optional(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        let order_number = next_order_number(last.as_deref())?;

        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            INSERT INTO orders (order_number, customer_id, order_date, address, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(&order_number)
        .bind(req.customer_id)
        .bind(req.order_date)
        .bind(&req.address)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        insert_items(&mut tx, order.order_id, &req.items).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order {} (ID {}) for customer {}",
            order.order_number, order.order_id, order.customer_id
        );
        Ok(order)
    }
}

async fn insert_items(
    tx: &mut Transaction<'_, Postgres>,
    order_id: i32,
    items: &[OrderItemRecord],
) -> Result<(), RepositoryError> {
    for item in items {
        sqlx::query("INSERT INTO order_items (order_id, product_id, quantity) VALUES ($1, $2, $3)")
            .bind(order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut **tx)
            .await
            .map_err(|err| match RepositoryError::from(err) {
                RepositoryError::ForeignKey(constraint)
                    if constraint == PRODUCT_FK_CONSTRAINT =>
                {
                    RepositoryError::ProductNotFound(item.product_id)
                }
                other => other,
            })?;
    }

    Ok(())
}

fn is_order_number_collision(err: &RepositoryError) -> bool {
    matches!(err, RepositoryError::UniqueViolation(constraint) if constraint == ORDER_NUMBER_CONSTRAINT)
}

/// Two concurrent creates can read the same last order and derive the same
/// number; the unique constraint catches it and one retry with a fresh read
/// resolves the race. A second collision surfaces to the caller.
async fn with_one_retry<F, Fut>(attempt: F) -> Result<Order, RepositoryError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<Order, RepositoryError>>,
{
    match attempt().await {
        Err(err) if is_order_number_collision(&err) => {
            warn!("🔁 Order number collision, retrying with a fresh sequence read");
            attempt().await
        }
        result => result,
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        req: &CreateOrderRecordRequest,
    ) -> Result<Order, RepositoryError> {
        with_one_retry(|| self.try_create_order(req))
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to create order for customer {}: {err:?}",
                    req.customer_id
                );
                err
            })
    }

    async fn update_order(
        &self,
        req: &UpdateOrderRecordRequest,
    ) -> Result<Order, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE orders
            SET order_date = $2,
                address    = $3,
                updated_at = current_timestamp
            WHERE order_id = $1
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(req.order_id)
        .bind(req.order_date)
        .bind(&req.address)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update order ID {}: {err:?}", req.order_id);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        // Full replacement of the item set, inside the same transaction so a
        // reader never observes the order without items.
        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(req.order_id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        insert_items(&mut tx, req.order_id, &req.items).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔄 Updated order ID {}", order.order_id);
        Ok(order)
    }

    async fn delete_order(&self, id: i32) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting order: {id}");

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // Cascade is explicit: dependent items go first, same transaction.
        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM orders WHERE order_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete order {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn order(number: &str) -> Order {
        Order {
            order_id: 1,
            order_number: number.to_string(),
            customer_id: 1,
            order_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            address: "12 Baker Street".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn collision() -> RepositoryError {
        RepositoryError::UniqueViolation(ORDER_NUMBER_CONSTRAINT.to_string())
    }

    #[tokio::test]
    async fn retries_once_after_an_order_number_collision() {
        let attempts = AtomicUsize::new(0);

        let result = with_one_retry(|| {
            let attempt = attempts.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    Err(collision())
                } else {
                    Ok(order("ORD00002"))
                }
            }
        })
        .await;

        assert_eq!(result.unwrap().order_number, "ORD00002");
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn surfaces_a_second_collision_without_further_retries() {
        let attempts = AtomicUsize::new(0);

        let result: Result<Order, RepositoryError> = with_one_retry(|| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Err(collision()) }
        })
        .await;

        assert!(matches!(
            result,
            Err(RepositoryError::UniqueViolation(ref constraint))
                if constraint == ORDER_NUMBER_CONSTRAINT
        ));
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn does_not_retry_unrelated_failures() {
        let attempts = AtomicUsize::new(0);

        let result: Result<Order, RepositoryError> = with_one_retry(|| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Err(RepositoryError::NotFound) }
        })
        .await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn does_not_retry_unique_violations_on_other_constraints() {
        let attempts = AtomicUsize::new(0);

        let result: Result<Order, RepositoryError> = with_one_retry(|| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async {
                Err(RepositoryError::UniqueViolation(
                    "customers_email_key".to_string(),
                ))
            }
        })
        .await;

        assert!(matches!(result, Err(RepositoryError::UniqueViolation(_))));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}

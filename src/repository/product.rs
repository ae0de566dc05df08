use crate::{
    abstract_trait::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
    config::ConnectionPool,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use tracing::{error, info};

const SELECT_COLUMNS: &str = "product_id, name, price, weight, created_at, updated_at";

fn classify_conflict(err: RepositoryError) -> RepositoryError {
    match err {
        RepositoryError::UniqueViolation(constraint)
            if constraint == "products_name_lower_key" =>
        {
            RepositoryError::AlreadyExists("Product name already taken.".into())
        }
        other => other,
    }
}

pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {SELECT_COLUMNS} FROM products ORDER BY product_id"
        ))
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {SELECT_COLUMNS} FROM products WHERE product_id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(product)
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {SELECT_COLUMNS} FROM products WHERE product_id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(products)
    }

    async fn exists_by_name(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM products
                WHERE LOWER(name) = LOWER($1)
                  AND ($2::int IS NULL OR product_id <> $2)
            )
            "#,
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(exists)
    }
}

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products (name, price, weight, created_at, updated_at)
            VALUES ($1, $2, $3, current_timestamp, current_timestamp)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(req.price)
        .bind(req.weight)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {err:?}", req.name);
            classify_conflict(RepositoryError::from(err))
        })?;

        info!("✅ Created product ID {}", product.product_id);
        Ok(product)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET name = $2,
                price = $3,
                weight = $4,
                updated_at = current_timestamp
            WHERE product_id = $1
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(req.product_id)
        .bind(&req.name)
        .bind(req.price)
        .bind(req.weight)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {err:?}", req.product_id);
            classify_conflict(RepositoryError::from(err))
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product ID {}", product.product_id);
        Ok(product)
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting product: {id}");

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynProductQueryRepository, ProductServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::info;

/// Per-unit weight ceiling; anything above it cannot ship.
const MAX_PRODUCT_WEIGHT: i64 = 25;

fn validate_weight(weight: Decimal) -> Result<(), ServiceError> {
    if weight <= Decimal::ZERO || weight > Decimal::from(MAX_PRODUCT_WEIGHT) {
        return Err(ServiceError::Validation(vec![
            "Weight must be positive and not more than 25kg.".into(),
        ]));
    }
    Ok(())
}

#[derive(Clone)]
pub struct ProductService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
}

impl ProductService {
    pub fn new(query: DynProductQueryRepository, command: DynProductCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = self.query.find_all().await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "success".into(),
            data: products.into_iter().map(ProductResponse::from).collect(),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "success".into(),
            data: ProductResponse::from(product),
        })
    }

    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🏗️ Creating product {}", req.name);

        validate_weight(req.weight)?;

        if self.query.exists_by_name(&req.name, None).await? {
            return Err(ServiceError::Validation(vec![
                "Product name already taken.".into(),
            ]));
        }

        let product = self.command.create_product(req).await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Product Added.".into(),
            data: ProductResponse::from(product),
        })
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("✏️ Updating product ID={}", req.product_id);

        validate_weight(req.weight)?;

        if self
            .query
            .exists_by_name(&req.name, Some(req.product_id))
            .await?
        {
            return Err(ServiceError::Validation(vec![
                "Product name already taken.".into(),
            ]));
        }

        let product = self.command.update_product(req).await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Product Updated.".into(),
            data: ProductResponse::from(product),
        })
    }

    async fn delete_product(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        self.command.delete_product(id).await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Product Deleted.".into(),
            data: (),
        })
    }
}

use async_trait::async_trait;
use ecommerce::{
    abstract_trait::{
        DynProductCommandRepository, DynProductQueryRepository, ProductCommandRepositoryTrait,
        ProductQueryRepositoryTrait, ProductServiceTrait,
    },
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    errors::{RepositoryError, ServiceError},
    model::Product,
    service::ProductService,
};
use rust_decimal::Decimal;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

#[derive(Default)]
struct Store {
    products: HashMap<i32, Product>,
    next_id: i32,
}

struct InMemoryProducts {
    store: Arc<Mutex<Store>>,
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProducts {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store.products.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Product>, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| store.products.get(id).cloned())
            .collect())
    }

    async fn exists_by_name(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store.products.values().any(|product| {
            product.name.eq_ignore_ascii_case(name) && Some(product.product_id) != exclude_id
        }))
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProducts {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let product = Product {
            product_id: store.next_id,
            name: req.name.clone(),
            price: req.price,
            weight: req.weight,
            created_at: None,
            updated_at: None,
        };
        store.products.insert(product.product_id, product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        let product = store
            .products
            .get_mut(&req.product_id)
            .ok_or(RepositoryError::NotFound)?;
        product.name = req.name.clone();
        product.price = req.price;
        product.weight = req.weight;
        Ok(product.clone())
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().unwrap();
        store.products.remove(&id).ok_or(RepositoryError::NotFound)?;
        Ok(())
    }
}

fn build_service() -> ProductService {
    let repo = Arc::new(InMemoryProducts {
        store: Arc::new(Mutex::new(Store::default())),
    });
    let query: DynProductQueryRepository = repo.clone();
    let command: DynProductCommandRepository = repo;

    ProductService::new(query, command)
}

fn create_request(name: &str, weight: Decimal) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        price: 10,
        weight,
    }
}

#[tokio::test]
async fn create_accepts_a_weight_at_the_per_unit_limit() {
    let service = build_service();

    let response = service
        .create_product(&create_request("Wardrobe", Decimal::from(25)))
        .await
        .unwrap();

    assert_eq!(response.message, "Product Added.");
    assert_eq!(response.data.weight, Decimal::from(25));
}

#[tokio::test]
async fn create_rejects_a_weight_above_the_per_unit_limit() {
    let service = build_service();

    let result = service
        .create_product(&create_request("Piano", Decimal::new(2501, 2)))
        .await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn create_rejects_a_non_positive_weight() {
    let service = build_service();

    let result = service
        .create_product(&create_request("Vacuum", Decimal::ZERO))
        .await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn create_rejects_a_duplicate_name_case_insensitively() {
    let service = build_service();
    service
        .create_product(&create_request("Couch", Decimal::from(10)))
        .await
        .unwrap();

    let result = service
        .create_product(&create_request("couch", Decimal::from(5)))
        .await;

    match result {
        Err(ServiceError::Validation(errors)) => {
            assert_eq!(errors, vec!["Product name already taken.".to_string()]);
        }
        other => panic!("expected duplicate-name rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn update_may_keep_its_own_name() {
    let service = build_service();
    let created = service
        .create_product(&create_request("Couch", Decimal::from(10)))
        .await
        .unwrap();

    let response = service
        .update_product(&UpdateProductRequest {
            product_id: created.data.id,
            name: "Couch".to_string(),
            price: 12,
            weight: Decimal::from(11),
        })
        .await
        .unwrap();

    assert_eq!(response.data.price, 12);
}

#[tokio::test]
async fn update_cannot_take_another_products_name() {
    let service = build_service();
    service
        .create_product(&create_request("Couch", Decimal::from(10)))
        .await
        .unwrap();
    let lamp = service
        .create_product(&create_request("Lamp", Decimal::from(2)))
        .await
        .unwrap();

    let result = service
        .update_product(&UpdateProductRequest {
            product_id: lamp.data.id,
            name: "Couch".to_string(),
            price: 3,
            weight: Decimal::from(2),
        })
        .await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn delete_of_a_missing_product_is_not_found() {
    let service = build_service();

    let result = service.delete_product(42).await;

    assert!(matches!(
        result,
        Err(ServiceError::Repo(RepositoryError::NotFound))
    ));
}

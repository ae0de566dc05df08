use async_trait::async_trait;
use ecommerce::{
    abstract_trait::{
        AuthServiceTrait, CustomerCommandRepositoryTrait, CustomerQueryRepositoryTrait,
        DynCustomerCommandRepository, DynCustomerQueryRepository, DynHashing, DynJwtService,
    },
    config::{Hashing, JwtConfig},
    domain::requests::auth::{ChangePasswordRequest, LoginRequest, RegisterRequest},
    domain::requests::customer::{CreateCustomerRecordRequest, UpdateCustomerRequest},
    errors::{RepositoryError, ServiceError},
    model::Customer,
    service::{AuthService, AuthServiceDeps},
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

#[derive(Default)]
struct Store {
    customers: HashMap<i32, Customer>,
    next_id: i32,
}

type SharedStore = Arc<Mutex<Store>>;

struct InMemoryCustomers {
    store: SharedStore,
}

#[async_trait]
impl CustomerQueryRepositoryTrait for InMemoryCustomers {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store.customers.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store.customers.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .customers
            .values()
            .find(|customer| customer.email == email)
            .cloned())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .customers
            .values()
            .any(|customer| customer.name.eq_ignore_ascii_case(name)))
    }

    async fn exists_by_contact_number(
        &self,
        contact_number: &str,
    ) -> Result<bool, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .customers
            .values()
            .any(|customer| customer.contact_number == contact_number))
    }
}

#[async_trait]
impl CustomerCommandRepositoryTrait for InMemoryCustomers {
    async fn create_customer(
        &self,
        req: &CreateCustomerRecordRequest,
    ) -> Result<Customer, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let customer = Customer {
            customer_id: store.next_id,
            name: req.name.clone(),
            email: req.email.clone(),
            contact_number: req.contact_number.clone(),
            password: req.password.clone(),
            created_at: None,
            updated_at: None,
        };
        store.customers.insert(customer.customer_id, customer.clone());
        Ok(customer)
    }

    async fn update_customer(
        &self,
        req: &UpdateCustomerRequest,
    ) -> Result<Customer, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        let customer = store
            .customers
            .get_mut(&req.customer_id)
            .ok_or(RepositoryError::NotFound)?;
        customer.name = req.name.clone();
        customer.email = req.email.clone();
        customer.contact_number = req.contact_number.clone();
        Ok(customer.clone())
    }

    async fn update_password(&self, id: i32, password: &str) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().unwrap();
        let customer = store.customers.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        customer.password = password.to_string();
        Ok(())
    }

    async fn delete_customer(&self, id: i32) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().unwrap();
        store.customers.remove(&id).ok_or(RepositoryError::NotFound)?;
        Ok(())
    }
}

fn build_service() -> AuthService {
    let store = Arc::new(Mutex::new(Store::default()));
    let repo = Arc::new(InMemoryCustomers { store });
    let query: DynCustomerQueryRepository = repo.clone();
    let command: DynCustomerCommandRepository = repo;
    let hash: DynHashing = Arc::new(Hashing::new());
    let token_service: DynJwtService = Arc::new(JwtConfig::new("test-secret"));

    AuthService::new(AuthServiceDeps {
        query,
        command,
        hash,
        token_service,
    })
}

fn register_request() -> RegisterRequest {
    RegisterRequest {
        name: "Jordan Doe".to_string(),
        email: "Jordan@Example.com".to_string(),
        contact_number: "0123456789".to_string(),
        password: "Sup3r!pass".to_string(),
        confirm_password: "Sup3r!pass".to_string(),
    }
}

#[tokio::test]
async fn register_lowercases_email_and_hides_the_password() {
    let service = build_service();

    let response = service.register(&register_request()).await.unwrap();

    assert_eq!(response.message, "Profile created");
    assert_eq!(response.data.email, "jordan@example.com");
}

#[tokio::test]
async fn register_rejects_duplicates_and_collects_every_error() {
    let service = build_service();
    service.register(&register_request()).await.unwrap();

    let mut req = register_request();
    req.password = "short".to_string();
    req.confirm_password = "different".to_string();

    let result = service.register(&req).await;

    match result {
        Err(ServiceError::Validation(errors)) => {
            assert!(errors.iter().any(|e| e.contains("don't match")));
            assert!(errors.iter().any(|e| e == "Email already taken."));
            assert!(errors.iter().any(|e| e == "Name already taken."));
            assert!(errors.iter().any(|e| e == "Contact number already taken."));
        }
        other => panic!("expected validation errors, got {other:?}"),
    }
}

#[tokio::test]
async fn login_returns_a_token_for_valid_credentials() {
    let service = build_service();
    service.register(&register_request()).await.unwrap();

    let response = service
        .login(&LoginRequest {
            email: "jordan@example.com".to_string(),
            password: "Sup3r!pass".to_string(),
        })
        .await
        .unwrap();

    assert!(!response.data.access_token.is_empty());
}

#[tokio::test]
async fn login_rejects_a_wrong_password() {
    let service = build_service();
    service.register(&register_request()).await.unwrap();

    let result = service
        .login(&LoginRequest {
            email: "jordan@example.com".to_string(),
            password: "Wrong!pass1".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
}

#[tokio::test]
async fn login_rejects_an_unknown_email() {
    let service = build_service();

    let result = service
        .login(&LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "Sup3r!pass".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
}

#[tokio::test]
async fn change_password_requires_the_old_password() {
    let service = build_service();
    let registered = service.register(&register_request()).await.unwrap();

    let result = service
        .change_password(
            registered.data.id,
            &ChangePasswordRequest {
                old_password: "NotTheOld!1".to_string(),
                new_password: "An0ther!pass".to_string(),
                confirm_password: "An0ther!pass".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
}

#[tokio::test]
async fn change_password_rotates_the_credential() {
    let service = build_service();
    let registered = service.register(&register_request()).await.unwrap();

    service
        .change_password(
            registered.data.id,
            &ChangePasswordRequest {
                old_password: "Sup3r!pass".to_string(),
                new_password: "An0ther!pass".to_string(),
                confirm_password: "An0ther!pass".to_string(),
            },
        )
        .await
        .unwrap();

    let old_login = service
        .login(&LoginRequest {
            email: "jordan@example.com".to_string(),
            password: "Sup3r!pass".to_string(),
        })
        .await;
    assert!(matches!(old_login, Err(ServiceError::InvalidCredentials)));

    let new_login = service
        .login(&LoginRequest {
            email: "jordan@example.com".to_string(),
            password: "An0ther!pass".to_string(),
        })
        .await;
    assert!(new_login.is_ok());
}

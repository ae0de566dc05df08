use crate::{
    abstract_trait::{
        DynAuthService, DynCustomerCommandRepository, DynCustomerQueryRepository,
        DynCustomerService, DynHashing, DynJwtService, DynOrderCommandRepository,
        DynOrderCommandService, DynOrderQueryRepository, DynOrderQueryService,
        DynProductCommandRepository, DynProductQueryRepository, DynProductService,
    },
    config::ConnectionPool,
    repository::{
        CustomerCommandRepository, CustomerQueryRepository, OrderCommandRepository,
        OrderQueryRepository, ProductCommandRepository, ProductQueryRepository,
    },
    service::{
        AuthService, AuthServiceDeps, CustomerService, OrderCommandService, OrderQueryService,
        ProductService,
    },
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub customer_service: DynCustomerService,
    pub product_service: DynProductService,
    pub order_query_service: DynOrderQueryService,
    pub order_command_service: DynOrderCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject").finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hashing: DynHashing, jwt_config: DynJwtService) -> Self {
        let customer_query: DynCustomerQueryRepository =
            Arc::new(CustomerQueryRepository::new(pool.clone()));
        let customer_command: DynCustomerCommandRepository =
            Arc::new(CustomerCommandRepository::new(pool.clone()));
        let product_query: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool.clone()));
        let order_query: DynOrderQueryRepository =
            Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_command: DynOrderCommandRepository =
            Arc::new(OrderCommandRepository::new(pool.clone()));

        let auth_service = Arc::new(AuthService::new(AuthServiceDeps {
            query: Arc::clone(&customer_query),
            command: Arc::clone(&customer_command),
            hash: hashing,
            token_service: jwt_config,
        })) as DynAuthService;

        let customer_service =
            Arc::new(CustomerService::new(customer_query, customer_command)) as DynCustomerService;

        let product_service = Arc::new(ProductService::new(
            Arc::clone(&product_query),
            product_command,
        )) as DynProductService;

        let order_query_service =
            Arc::new(OrderQueryService::new(Arc::clone(&order_query))) as DynOrderQueryService;

        let order_command_service = Arc::new(OrderCommandService::new(
            product_query,
            order_command,
            order_query,
        )) as DynOrderCommandService;

        Self {
            auth_service,
            customer_service,
            product_service,
            order_query_service,
            order_command_service,
        }
    }
}

mod auth;
mod customer;
mod hashing;
mod jwt;
mod order;
mod product;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::customer::{
    CustomerCommandRepositoryTrait, CustomerQueryRepositoryTrait, CustomerServiceTrait,
    DynCustomerCommandRepository, DynCustomerQueryRepository, DynCustomerService,
};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductQueryRepository, DynProductService,
    ProductCommandRepositoryTrait, ProductQueryRepositoryTrait, ProductServiceTrait,
};

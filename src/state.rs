use crate::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionPool, Hashing, JwtConfig},
    di::DependenciesInject,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let jwt_config: DynJwtService = Arc::new(JwtConfig::new(&config.jwt_secret));
        let hashing: DynHashing = Arc::new(Hashing::new());

        let di_container = DependenciesInject::new(pool, hashing, jwt_config.clone());

        Self {
            di_container,
            jwt_config,
        }
    }
}

use crate::{
    abstract_trait::{
        AuthServiceTrait, DynCustomerCommandRepository, DynCustomerQueryRepository, DynHashing,
        DynJwtService,
    },
    domain::{
        requests::auth::{ChangePasswordRequest, LoginRequest, RegisterRequest},
        requests::customer::CreateCustomerRecordRequest,
        responses::{ApiResponse, CustomerResponse, TokenResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::validate_password,
};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct AuthService {
    query: DynCustomerQueryRepository,
    command: DynCustomerCommandRepository,
    hash: DynHashing,
    token_service: DynJwtService,
}

pub struct AuthServiceDeps {
    pub query: DynCustomerQueryRepository,
    pub command: DynCustomerCommandRepository,
    pub hash: DynHashing,
    pub token_service: DynJwtService,
}

impl AuthService {
    pub fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            query,
            command,
            hash,
            token_service,
        } = deps;

        Self {
            query,
            command,
            hash,
            token_service,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        info!("📝 Registering customer {}", req.email);

        let mut errors = Vec::new();

        if req.password != req.confirm_password {
            errors.push("Password and confirm password don't match.".to_string());
        }
        if let Err(policy_errors) = validate_password(&req.password) {
            errors.extend(policy_errors);
        }

        let email = req.email.to_lowercase();
        if self.query.find_by_email(&email).await?.is_some() {
            errors.push("Email already taken.".to_string());
        }
        if self.query.exists_by_name(&req.name).await? {
            errors.push("Name already taken.".to_string());
        }
        if self
            .query
            .exists_by_contact_number(&req.contact_number)
            .await?
        {
            errors.push("Contact number already taken.".to_string());
        }

        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let hashed = self.hash.hash_password(&req.password).await?;

        let customer = self
            .command
            .create_customer(&CreateCustomerRecordRequest {
                name: req.name.clone(),
                email,
                contact_number: req.contact_number.clone(),
                password: hashed,
            })
            .await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Profile created".into(),
            data: CustomerResponse::from(customer),
        })
    }

    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let email = req.email.to_lowercase();

        let customer = self
            .query
            .find_by_email(&email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if let Err(err) = self
            .hash
            .compare_password(&customer.password, &req.password)
            .await
        {
            warn!("🚫 Failed login attempt for {email}");
            return Err(err);
        }

        let access_token = self
            .token_service
            .generate_token(i64::from(customer.customer_id), "access")?;

        info!("🔓 Customer {} logged in", customer.customer_id);

        Ok(ApiResponse {
            status: "success".into(),
            message: "Logged in".into(),
            data: TokenResponse { access_token },
        })
    }

    async fn get_me(
        &self,
        customer_id: i32,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        let customer = self
            .query
            .find_by_id(customer_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "success".into(),
            data: CustomerResponse::from(customer),
        })
    }

    async fn change_password(
        &self,
        customer_id: i32,
        req: &ChangePasswordRequest,
    ) -> Result<ApiResponse<()>, ServiceError> {
        let customer = self
            .query
            .find_by_id(customer_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        self.hash
            .compare_password(&customer.password, &req.old_password)
            .await?;

        let mut errors = Vec::new();
        if req.new_password != req.confirm_password {
            errors.push("New password and confirm password doesn't match.".to_string());
        }
        if let Err(policy_errors) = validate_password(&req.new_password) {
            errors.extend(policy_errors);
        }
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let hashed = self.hash.hash_password(&req.new_password).await?;
        self.command.update_password(customer_id, &hashed).await?;

        info!("🔑 Customer {customer_id} changed password");

        Ok(ApiResponse {
            status: "success".into(),
            message: "Password changed Successfully.".into(),
            data: (),
        })
    }
}

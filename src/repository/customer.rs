use crate::{
    abstract_trait::{CustomerCommandRepositoryTrait, CustomerQueryRepositoryTrait},
    config::ConnectionPool,
    domain::requests::customer::{CreateCustomerRecordRequest, UpdateCustomerRequest},
    errors::RepositoryError,
    model::Customer,
};
use async_trait::async_trait;
use tracing::{error, info};

const SELECT_COLUMNS: &str =
    "customer_id, name, email, contact_number, password, created_at, updated_at";

fn classify_conflict(err: RepositoryError) -> RepositoryError {
    match err {
        RepositoryError::UniqueViolation(constraint) => match constraint.as_str() {
            "customers_email_key" => RepositoryError::AlreadyExists("Email already taken.".into()),
            "customers_name_lower_key" => {
                RepositoryError::AlreadyExists("Name already taken.".into())
            }
            "customers_contact_number_key" => {
                RepositoryError::AlreadyExists("Contact number already taken.".into())
            }
            _ => RepositoryError::UniqueViolation(constraint),
        },
        other => other,
    }
}

pub struct CustomerQueryRepository {
    db: ConnectionPool,
}

impl CustomerQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerQueryRepositoryTrait for CustomerQueryRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let customers = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {SELECT_COLUMNS} FROM customers ORDER BY customer_id"
        ))
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(customers)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {SELECT_COLUMNS} FROM customers WHERE customer_id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(customer)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {SELECT_COLUMNS} FROM customers WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(customer)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE LOWER(name) = LOWER($1))",
        )
        .bind(name)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(exists)
    }

    async fn exists_by_contact_number(
        &self,
        contact_number: &str,
    ) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE contact_number = $1)",
        )
        .bind(contact_number)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(exists)
    }
}

pub struct CustomerCommandRepository {
    db: ConnectionPool,
}

impl CustomerCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerCommandRepositoryTrait for CustomerCommandRepository {
    async fn create_customer(
        &self,
        req: &CreateCustomerRecordRequest,
    ) -> Result<Customer, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            r#"
            INSERT INTO customers (name, email, contact_number, password, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.contact_number)
        .bind(&req.password)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create customer {}: {err:?}", req.email);
            classify_conflict(RepositoryError::from(err))
        })?;

        info!("✅ Created customer ID {}", customer.customer_id);
        Ok(customer)
    }

    async fn update_customer(
        &self,
        req: &UpdateCustomerRequest,
    ) -> Result<Customer, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            r#"
            UPDATE customers
            SET name = $2,
                email = $3,
                contact_number = $4,
                updated_at = current_timestamp
            WHERE customer_id = $1
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(req.customer_id)
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.contact_number)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update customer ID {}: {err:?}", req.customer_id);
            classify_conflict(RepositoryError::from(err))
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated customer ID {}", customer.customer_id);
        Ok(customer)
    }

    async fn update_password(&self, id: i32, password: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE customers SET password = $2, updated_at = current_timestamp WHERE customer_id = $1",
        )
        .bind(id)
        .bind(password)
        .execute(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete_customer(&self, id: i32) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting customer: {id}");

        let result = sqlx::query("DELETE FROM customers WHERE customer_id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete customer {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

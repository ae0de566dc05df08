use sqlx::Error as SqlxError;
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Product {0} does not exist")]
    ProductNotFound(i32),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Stored order number {0:?} does not match the ORD sequence format")]
    CorruptOrderNumber(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        if let SqlxError::RowNotFound = err {
            return RepositoryError::NotFound;
        }

        if let SqlxError::Database(ref db) = err {
            let constraint = db.constraint().unwrap_or_default().to_string();
            match db.kind() {
                ErrorKind::UniqueViolation => {
                    return RepositoryError::UniqueViolation(constraint);
                }
                ErrorKind::ForeignKeyViolation => {
                    return RepositoryError::ForeignKey(constraint);
                }
                _ => {}
            }
        }

        RepositoryError::Sqlx(err)
    }
}

//! Error types for store operations

use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by message store operations.
///
/// The API layer does not distinguish between these variants; every one of
/// them collapses into the same generic failure envelope at the route
/// boundary. The variants exist so logs name the actual cause.
#[derive(Debug, Error)]
pub enum Error {
    /// Database unreachable or authentication failure
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Connection pool issues
    #[error("Pool error: {0}")]
    PoolError(String),

    /// SQL errors and constraint violations
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Invalid input data rejected by the store
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<tokio_postgres::Error> for Error {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_error) = err.as_db_error() {
            // Keep the SQLSTATE code so constraint violations are identifiable
            // in the logs even though the API envelope flattens them
            return Error::DatabaseError(format!(
                "{}: {}",
                db_error.code().code(),
                db_error.message()
            ));
        }
        Error::DatabaseError(format!("{:?}", err))
    }
}

impl From<deadpool_postgres::PoolError> for Error {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Error::PoolError(err.to_string())
    }
}

impl From<deadpool_postgres::BuildError> for Error {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        Error::ConnectionError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_display() {
        let err = Error::ConnectionError("refused".to_string());
        assert!(err.to_string().contains("Connection error"));
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn test_database_error_display() {
        let err = Error::DatabaseError("23502: null value".to_string());
        assert!(err.to_string().contains("Database error"));
        assert!(err.to_string().contains("23502"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = Error::ValidationError("name is required".to_string());
        assert!(err.to_string().contains("Validation error"));
        assert!(err.to_string().contains("name is required"));
    }
}

//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  PostgreSQL error (sqlx::Error)                                        │
//! │       │                                                                 │
//! │       ├── SQLSTATE 23505 ──► DbError::UniqueViolation                  │
//! │       ├── SQLSTATE 23503 ──► DbError::ForeignKeyViolation              │
//! │       ├── PoolTimedOut   ──► DbError::PoolExhausted                    │
//! │       └── anything else  ──► DbError::Driver                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Route handler maps DbError to an HTTP status                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no retry and no local recovery. Categorized or not, each
//! `DbError` carries the driver error it came from.

use std::borrow::Cow;

use thiserror::Error;

/// PostgreSQL `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Database operation errors.
///
/// Every variant keeps the `sqlx::Error` it was built from, reachable
/// through [`DbError::driver`] or `std::error::Error::source`.
#[derive(Debug, Error)]
pub enum DbError {
    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Registering an email that already exists
    #[error("Duplicate value violates {constraint}")]
    UniqueViolation {
        constraint: String,
        source: sqlx::Error,
    },

    /// Foreign key constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting a property for an owner_id with no user row
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation {
        message: String,
        source: sqlx::Error,
    },

    /// Database connection failed (bad URL, unreachable server).
    #[error("Connection failed: {0}")]
    ConnectionFailed(#[source] sqlx::Error),

    /// Pool exhausted (acquire timed out).
    #[error("Connection pool exhausted")]
    PoolExhausted(#[source] sqlx::Error),

    /// Any other driver error, unchanged.
    #[error(transparent)]
    Driver(sqlx::Error),
}

impl DbError {
    /// The driver error this was built from.
    pub fn driver(&self) -> &sqlx::Error {
        match self {
            DbError::UniqueViolation { source, .. } => source,
            DbError::ForeignKeyViolation { source, .. } => source,
            DbError::ConnectionFailed(err) => err,
            DbError::PoolExhausted(err) => err,
            DbError::Driver(err) => err,
        }
    }

    /// The SQLSTATE code, when the server reported one.
    pub fn code(&self) -> Option<Cow<'_, str>> {
        match self.driver() {
            sqlx::Error::Database(db_err) => db_err.code(),
            _ => None,
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database (23505) → DbError::UniqueViolation
/// sqlx::Error::Database (23503) → DbError::ForeignKeyViolation
/// sqlx::Error::PoolTimedOut     → DbError::PoolExhausted
/// Other                         → DbError::Driver
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        let (code, constraint, message) = match &err {
            sqlx::Error::Database(db_err) => (
                db_err.code().map(Cow::into_owned),
                db_err.constraint().map(str::to_string),
                db_err.message().to_string(),
            ),
            _ => (None, None, String::new()),
        };

        match code.as_deref() {
            Some(UNIQUE_VIOLATION) => DbError::UniqueViolation {
                constraint: constraint.unwrap_or_else(|| "unknown constraint".to_string()),
                source: err,
            },
            Some(FOREIGN_KEY_VIOLATION) => DbError::ForeignKeyViolation {
                message,
                source: err,
            },
            _ => match err {
                sqlx::Error::PoolTimedOut => DbError::PoolExhausted(err),
                other => DbError::Driver(other),
            },
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind};

    /// Server error with a fixed SQLSTATE.
    #[derive(Debug)]
    struct ServerError {
        code: &'static str,
        constraint: Option<&'static str>,
    }

    impl fmt::Display for ServerError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "server error {}", self.code)
        }
    }

    impl std::error::Error for ServerError {}

    impl DatabaseError for ServerError {
        fn message(&self) -> &str {
            "server error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn constraint(&self) -> Option<&str> {
            self.constraint
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    fn server_error(code: &'static str, constraint: Option<&'static str>) -> sqlx::Error {
        sqlx::Error::Database(Box::new(ServerError { code, constraint }))
    }

    #[test]
    fn test_unique_violation_keeps_driver_error() {
        let err = DbError::from(server_error("23505", Some("users_email_key")));

        assert!(matches!(
            &err,
            DbError::UniqueViolation { constraint, .. } if constraint == "users_email_key"
        ));
        assert_eq!(err.code().as_deref(), Some("23505"));
        assert!(err.source().is_some());
        assert!(matches!(err.driver(), sqlx::Error::Database(_)));
    }

    #[test]
    fn test_foreign_key_violation_keeps_driver_error() {
        let err = DbError::from(server_error("23503", None));

        assert!(matches!(
            &err,
            DbError::ForeignKeyViolation { message, .. } if message == "server error"
        ));
        assert_eq!(err.code().as_deref(), Some("23503"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_pool_timeout_keeps_driver_error() {
        let err = DbError::from(sqlx::Error::PoolTimedOut);

        assert!(matches!(err, DbError::PoolExhausted(_)));
        assert!(err.source().is_some());
        assert!(matches!(err.driver(), sqlx::Error::PoolTimedOut));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let err = DbError::from(sqlx::Error::PoolClosed);
        assert!(matches!(err.driver(), sqlx::Error::PoolClosed));
        assert_eq!(err.to_string(), sqlx::Error::PoolClosed.to_string());

        let err = DbError::from(server_error("42601", None));
        assert!(matches!(err, DbError::Driver(_)));
        assert_eq!(err.code().as_deref(), Some("42601"));
    }
}

//! Error types for database access
//!
//! Every fallible operation in [`crate::database`] and in the session
//! repositories built on top of it reports a [`DatabaseError`].

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Failure while configuring, reaching or querying PostgreSQL
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The pool could not open a connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// A statement failed to execute
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// A row was returned but a column did not decode into the expected type
    #[error("Database decode error: {0}")]
    Decode(#[source] SqlxError),

    /// Schema setup failed at startup
    #[error("Database migration error: {0}")]
    Migration(String),

    /// Connection settings are missing or malformed
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;

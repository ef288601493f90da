//! Error types for the Cassandra naming authority.
//!
//! Driver errors are kept as-is in [`CassandraAuthorityError`] and mapped
//! onto [`NamingError`] at the trait boundary, keeping unreachable-cluster
//! failures in the infrastructure family.

use keyspace_naming::NamingError;
use scylla::errors::{
    DbError, DeserializationError, ExecutionError, IntoRowsResultError, NewSessionError,
    RequestAttemptError, RowsError,
};
use thiserror::Error;

/// Result type alias for Cassandra authority internals.
pub type Result<T> = std::result::Result<T, CassandraAuthorityError>;

/// Errors specific to the Cassandra naming authority.
#[derive(Debug, Error)]
pub enum CassandraAuthorityError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The driver could not open a session.
    #[error("Failed to open session: {0}")]
    NewSession(#[from] NewSessionError),

    /// A statement failed to execute.
    #[error("Statement failed: {0}")]
    Execution(#[from] ExecutionError),

    /// A statement expected to return rows did not.
    #[error("Result has no rows: {0}")]
    IntoRows(#[from] IntoRowsResultError),

    /// The row type did not match the result's columns.
    #[error("Unexpected row shape: {0}")]
    Rows(#[from] RowsError),

    /// A row could not be deserialized.
    #[error("Row deserialization failed: {0}")]
    Deserialization(#[from] DeserializationError),
}

impl From<CassandraAuthorityError> for NamingError {
    fn from(err: CassandraAuthorityError) -> Self {
        match err {
            CassandraAuthorityError::Config(message) => {
                NamingError::internal(format!("Config: {message}"))
            },
            CassandraAuthorityError::NewSession(source) => {
                let message = source.to_string();
                NamingError::connection_with_source(message, source)
            },
            CassandraAuthorityError::Execution(source) => execution_error_to_naming_error(source),
            CassandraAuthorityError::IntoRows(source) => {
                let message = source.to_string();
                NamingError::internal_with_source(message, source)
            },
            CassandraAuthorityError::Rows(source) => {
                let message = source.to_string();
                NamingError::internal_with_source(message, source)
            },
            CassandraAuthorityError::Deserialization(source) => {
                let message = source.to_string();
                NamingError::internal_with_source(message, source)
            },
        }
    }
}

/// Converts a driver execution error, splitting on whether the server
/// answered at all.
fn execution_error_to_naming_error(err: ExecutionError) -> NamingError {
    match &err {
        ExecutionError::RequestTimeout(duration) => {
            tracing::warn!(timeout = ?duration, "Cassandra request timed out");
            NamingError::timeout()
        },
        ExecutionError::EmptyPlan | ExecutionError::ConnectionPoolError(_) => {
            let message = err.to_string();
            NamingError::connection_with_source(message, err)
        },
        ExecutionError::LastAttemptError(RequestAttemptError::DbError(db_error, message)) => {
            if is_unavailable(db_error) {
                tracing::warn!(error = %db_error, "Cassandra cluster unavailable");
                let message = message.clone();
                NamingError::connection_with_source(message, err)
            } else {
                let message = message.clone();
                NamingError::query_with_source(message, err)
            }
        },
        // Broken connections, unreachable hosts, and the like.
        ExecutionError::LastAttemptError(_) => {
            let message = err.to_string();
            NamingError::connection_with_source(message, err)
        },
        ExecutionError::BadQuery(_) => {
            let message = err.to_string();
            NamingError::query_with_source(message, err)
        },
        _ => {
            let message = err.to_string();
            NamingError::internal_with_source(message, err)
        },
    }
}

/// Server-side errors that mean "try again later", not "bad request".
fn is_unavailable(err: &DbError) -> bool {
    matches!(
        err,
        DbError::Unavailable { .. }
            | DbError::Overloaded
            | DbError::IsBootstrapping
            | DbError::ReadTimeout { .. }
            | DbError::WriteTimeout { .. }
    )
}

//! Naming error types and result alias.
//!
//! Every [`NamingAuthority`](crate::NamingAuthority) maps its internal
//! failures onto [`NamingError`]. The variants split into two families:
//!
//! - **Infrastructure** ([`Connection`](NamingError::Connection),
//!   [`Timeout`](NamingError::Timeout)) — the authority could not be reached
//!   or the request could not complete. A scenario that hits one of these is
//!   inconclusive, not failed.
//! - **Request** ([`InvalidIdentifier`](NamingError::InvalidIdentifier),
//!   [`Query`](NamingError::Query), [`Internal`](NamingError::Internal)) —
//!   the authority answered, and the answer was a rejection.
//!
//! # Example
//!
//! ```
//! use keyspace_naming::{NamingError, NamingResult};
//!
//! fn connect(host: &str) -> NamingResult<()> {
//!     Err(NamingError::connection(format!("{host}: connection refused")))
//! }
//!
//! assert!(connect("127.0.0.1").unwrap_err().is_infrastructure());
//! ```

use std::sync::Arc;

use thiserror::Error;

/// A boxed error type for source chain tracking.
pub type BoxError = Arc<dyn std::error::Error + Send + Sync>;

/// Result type alias for naming authority operations.
pub type NamingResult<T> = Result<T, NamingError>;

/// Errors that can occur while talking to a naming authority.
///
/// Errors preserve their source chain via `#[source]`.
///
/// # Non-exhaustive
///
/// New variants may be added in future minor releases. Downstream match
/// expressions must include a wildcard arm.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum NamingError {
    /// The authority could not be reached.
    #[error("Connection error: {message}")]
    Connection {
        /// Description of the connection error.
        message: String,
        /// The underlying error that caused this connection failure.
        #[source]
        source: Option<BoxError>,
    },

    /// The request exceeded its time limit.
    #[error("Operation timeout")]
    Timeout,

    /// The identifier was rejected before any request was sent.
    #[error("Invalid identifier {name:?}: {reason}")]
    InvalidIdentifier {
        /// The identifier as the caller spelled it.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The authority received the request and rejected it.
    #[error("Query rejected: {message}")]
    Query {
        /// The authority's rejection message.
        message: String,
        /// The underlying driver error.
        #[source]
        source: Option<BoxError>,
    },

    /// Catch-all for authority-specific failures.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
        /// The underlying error that caused this internal failure.
        #[source]
        source: Option<BoxError>,
    },
}

impl NamingError {
    /// Creates a new `Connection` error with the given message.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection { message: message.into(), source: None }
    }

    /// Creates a new `Connection` error with a message and source error.
    #[must_use]
    pub fn connection_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Connection { message: message.into(), source: Some(Arc::new(source)) }
    }

    /// Creates a new `Timeout` error.
    #[must_use]
    pub fn timeout() -> Self {
        Self::Timeout
    }

    /// Creates a new `InvalidIdentifier` error.
    #[must_use]
    pub fn invalid_identifier(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier { name: name.into(), reason: reason.into() }
    }

    /// Creates a new `Query` error with the given message.
    #[must_use]
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query { message: message.into(), source: None }
    }

    /// Creates a new `Query` error with a message and source error.
    #[must_use]
    pub fn query_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Query { message: message.into(), source: Some(Arc::new(source)) }
    }

    /// Creates a new `Internal` error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into(), source: None }
    }

    /// Creates a new `Internal` error with a message and source error.
    #[must_use]
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Internal { message: message.into(), source: Some(Arc::new(source)) }
    }

    /// Returns `true` when the error says nothing about naming semantics.
    ///
    /// Connection failures and timeouts are infrastructure errors; a scenario
    /// that hits one is reported as inconclusive.
    #[must_use]
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Timeout)
    }
}

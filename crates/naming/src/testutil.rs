//! Shared test utilities for naming authority testing.
//!
//! Feature-gated behind `testutil`. Enable it in `[dev-dependencies]`:
//!
//! ```toml
//! [dev-dependencies]
//! keyspace-naming = { path = "../naming", features = ["testutil"] }
//! ```
//!
//! ```no_run
//! // Requires the `testutil` feature to be enabled.
//! use keyspace_naming::testutil::populated_authority;
//! ```

use crate::{NamingAuthority, identifier::Identifier, memory::MemoryAuthority};

/// Create a [`MemoryAuthority`] holding one keyspace per CQL spelling.
///
/// Spellings are parsed with [`Identifier::parse`], so `"\"Quoted\""` keeps
/// its case and `"Bare"` folds.
///
/// # Panics
///
/// Panics if a spelling is not a valid keyspace name.
pub async fn populated_authority(spellings: &[&str]) -> MemoryAuthority {
    let authority = MemoryAuthority::new();
    for spelling in spellings {
        authority
            .create_if_absent(&Identifier::parse(spelling))
            .await
            .expect("populate create failed");
    }
    authority
}

/// Assert that a lookup result is `Ok(Some(_))`, returning the metadata.
///
/// # Examples
///
/// ```no_run
/// // Requires the `testutil` feature to be enabled.
/// use keyspace_naming::{KeyspaceMetadata, NamingResult, Replication, assert_found};
///
/// let result: NamingResult<Option<KeyspaceMetadata>> =
///     Ok(Some(KeyspaceMetadata::new("ks", Replication::default())));
/// let metadata = assert_found!(result);
/// assert_eq!(metadata.name(), "ks");
/// ```
#[macro_export]
macro_rules! assert_found {
    ($result:expr) => {
        match $result {
            Ok(Some(metadata)) => metadata,
            other => panic!("expected a keyspace, got: {:?}", other),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(Some(metadata)) => metadata,
            other => panic!("{}: expected a keyspace, got: {:?}", $msg, other),
        }
    };
}

/// Assert that a lookup result is `Ok(None)`.
///
/// # Examples
///
/// ```no_run
/// // Requires the `testutil` feature to be enabled.
/// use keyspace_naming::{KeyspaceMetadata, NamingResult, assert_absent};
///
/// let result: NamingResult<Option<KeyspaceMetadata>> = Ok(None);
/// assert_absent!(result);
/// ```
#[macro_export]
macro_rules! assert_absent {
    ($result:expr) => {
        assert!(matches!($result, Ok(None)), "expected no keyspace, got: {:?}", $result);
    };
    ($result:expr, $msg:expr) => {
        assert!(matches!($result, Ok(None)), "{}: expected no keyspace, got: {:?}", $msg, $result);
    };
}

/// Assert that a result failed with an infrastructure error.
///
/// # Examples
///
/// ```no_run
/// // Requires the `testutil` feature to be enabled.
/// use keyspace_naming::{NamingError, NamingResult, assert_infrastructure};
///
/// let result: NamingResult<()> = Err(NamingError::timeout());
/// assert_infrastructure!(result);
/// ```
#[macro_export]
macro_rules! assert_infrastructure {
    ($result:expr) => {
        assert!(
            matches!(&$result, Err(err) if err.is_infrastructure()),
            "expected an infrastructure error, got: {:?}",
            $result,
        );
    };
    ($result:expr, $msg:expr) => {
        assert!(
            matches!(&$result, Err(err) if err.is_infrastructure()),
            "{}: expected an infrastructure error, got: {:?}",
            $msg,
            $result,
        );
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use crate::{NamingError, NamingResult};

    use super::*;

    #[tokio::test]
    async fn populated_authority_parses_spellings() {
        let authority = populated_authority(&["Bare", "\"Quoted\""]).await;

        let bare = assert_found!(authority.lookup(&Identifier::unquoted("BARE")).await);
        assert_eq!(bare.name(), "bare");
        assert_found!(authority.lookup(&Identifier::quoted("Quoted")).await);
        assert_absent!(authority.lookup(&Identifier::quoted("quoted")).await);
    }

    #[test]
    fn infrastructure_macro_accepts_connection_errors() {
        let result: NamingResult<()> = Err(NamingError::connection("refused"));
        assert_infrastructure!(result, "connection refused");
    }
}

//! Naming authority trait definition.
//!
//! A [`NamingAuthority`] is whatever owns keyspace names: a Cassandra cluster
//! behind a driver session, or the in-memory [`MemoryAuthority`](crate::MemoryAuthority)
//! fake. The conformance checker only ever talks to this trait, so the same
//! scenarios run hermetically or against a live server.
//!
//! # Implementing an Authority
//!
//! 1. Implement [`NamingAuthority`], applying [`Identifier::normalized`] for
//!    every lookup and creation.
//! 2. Map backend-specific errors to [`NamingError`], keeping connection
//!    failures and timeouts in the infrastructure family.
//! 3. Run the [`conformance`](crate::conformance) suite against it.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::{error::NamingResult, identifier::Identifier, metadata::KeyspaceMetadata};

/// Abstract keyspace-management API.
///
/// Authorities are `Send + Sync`; the harness itself drives them from a
/// single task, one request at a time.
///
/// | Method | Description |
/// |--------|-------------|
/// | [`create_if_absent`](NamingAuthority::create_if_absent) | Create a keyspace unless it exists |
/// | [`create_table_if_absent`](NamingAuthority::create_table_if_absent) | Create a table in an existing keyspace |
/// | [`lookup`](NamingAuthority::lookup) | Resolve a keyspace by its normalized name |
/// | [`list_all`](NamingAuthority::list_all) | Enumerate stored keyspace names |
/// | [`drop_if_exists`](NamingAuthority::drop_if_exists) | Remove a keyspace (fixture provisioning) |
/// | [`health_check`](NamingAuthority::health_check) | Verify the authority is reachable |
#[async_trait]
pub trait NamingAuthority: Send + Sync {
    /// Creates the keyspace unless an entry with the same normalized name
    /// exists. Re-creating an existing keyspace succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// - [`NamingError::InvalidIdentifier`](crate::NamingError::InvalidIdentifier) if the name
    ///   breaks the naming rules.
    /// - An infrastructure error if the authority is unreachable.
    #[must_use = "naming operations may fail and errors must be handled"]
    async fn create_if_absent(&self, keyspace: &Identifier) -> NamingResult<()>;

    /// Creates a `(mykey text PRIMARY KEY, myvalue text)` table inside an
    /// existing keyspace unless it already exists.
    ///
    /// # Errors
    ///
    /// - [`NamingError::Query`](crate::NamingError::Query) if the keyspace does not exist.
    /// - [`NamingError::InvalidIdentifier`](crate::NamingError::InvalidIdentifier) for a bad
    ///   keyspace or table name.
    #[must_use = "naming operations may fail and errors must be handled"]
    async fn create_table_if_absent(
        &self,
        keyspace: &Identifier,
        table: &Identifier,
    ) -> NamingResult<()>;

    /// Resolves a keyspace by exact match on its normalized name.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(metadata))` if the keyspace exists
    /// - `Ok(None)` if it does not
    /// - `Err(...)` only when the authority could not answer
    #[must_use = "naming operations may fail and errors must be handled"]
    async fn lookup(&self, keyspace: &Identifier) -> NamingResult<Option<KeyspaceMetadata>>;

    /// Every user keyspace the authority stores, by stored spelling.
    /// The authority's own system keyspaces are excluded.
    #[must_use = "naming operations may fail and errors must be handled"]
    async fn list_all(&self) -> NamingResult<BTreeSet<String>>;

    /// Drops the keyspace if it exists. Only fixtures call this, to hand each
    /// scenario a clean authority.
    #[must_use = "naming operations may fail and errors must be handled"]
    async fn drop_if_exists(&self, keyspace: &Identifier) -> NamingResult<()>;

    /// Returns `Ok(())` when the authority can serve requests.
    #[must_use = "health check results indicate authority availability and must be inspected"]
    async fn health_check(&self) -> NamingResult<()>;
}

/// Drops every user keyspace so the next scenario starts from nothing.
///
/// Stored names are dropped through their quoted spelling, which addresses
/// them exactly.
///
/// # Errors
///
/// Propagates the first failure from [`list_all`](NamingAuthority::list_all)
/// or [`drop_if_exists`](NamingAuthority::drop_if_exists).
#[tracing::instrument(skip_all)]
pub async fn provision_clean<A>(authority: &A) -> NamingResult<()>
where
    A: NamingAuthority + ?Sized,
{
    let existing = authority.list_all().await?;
    for name in existing {
        tracing::debug!(keyspace = %name, "dropping leftover keyspace");
        authority.drop_if_exists(&Identifier::quoted(name)).await?;
    }
    Ok(())
}

/// Hands out a fresh authority for each scenario.
///
/// [`run_scenarios`](crate::run_scenarios) provisions through a factory so
/// that no scenario ever sees state another one left behind.
#[async_trait]
pub trait AuthorityFactory: Send + Sync {
    /// The authority type this factory provisions.
    type Authority: NamingAuthority;

    /// Provisions a clean authority.
    ///
    /// # Errors
    ///
    /// Returns an infrastructure error if the authority cannot be reached.
    async fn provision(&self) -> NamingResult<Self::Authority>;
}

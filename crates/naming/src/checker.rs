//! Drives create and lookup requests and keeps the lookup log.

use std::collections::BTreeSet;

use crate::{
    authority::NamingAuthority,
    error::NamingResult,
    identifier::Identifier,
    metadata::KeyspaceMetadata,
    observation::ObservationResult,
};

/// Issues identifier requests against one injected authority.
///
/// The checker borrows its authority for its whole life; it never owns or
/// shares a connection. Every lookup lands in the
/// [`ObservationResult`] returned by [`into_observations`](Self::into_observations).
///
/// # Example
///
/// ```
/// use keyspace_naming::{Identifier, MemoryAuthority, NamingConformanceChecker};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let authority = MemoryAuthority::new();
/// let mut checker = NamingConformanceChecker::new(&authority);
///
/// checker.create_identifier("mykeyspace", true).await.unwrap();
/// checker.create_identifier("myKeyspace", true).await.unwrap();
///
/// let distinct = checker
///     .identifiers_distinct(&Identifier::quoted("mykeyspace"), &Identifier::quoted("myKeyspace"))
///     .await
///     .unwrap();
/// assert!(distinct);
/// assert_eq!(checker.observations().len(), 2);
/// # });
/// ```
pub struct NamingConformanceChecker<'a, A: NamingAuthority + ?Sized> {
    authority: &'a A,
    observations: ObservationResult,
}

impl<'a, A: NamingAuthority + ?Sized> NamingConformanceChecker<'a, A> {
    /// Wraps an authority with an empty lookup log.
    pub fn new(authority: &'a A) -> Self {
        Self { authority, observations: ObservationResult::new() }
    }

    /// Creates `name`, wrapped in quotes when `quoted` is true, and returns
    /// the identifier that was sent. Creating an existing name succeeds.
    ///
    /// # Errors
    ///
    /// Anything the authority's
    /// [`create_if_absent`](NamingAuthority::create_if_absent) returns.
    pub async fn create_identifier(&mut self, name: &str, quoted: bool) -> NamingResult<Identifier> {
        let identifier = Identifier::new(name, quoted);
        self.create(&identifier).await?;
        Ok(identifier)
    }

    /// Creates an already-built identifier.
    ///
    /// # Errors
    ///
    /// Anything the authority's
    /// [`create_if_absent`](NamingAuthority::create_if_absent) returns.
    pub async fn create(&mut self, identifier: &Identifier) -> NamingResult<()> {
        tracing::debug!(keyspace = %identifier, "create");
        self.authority.create_if_absent(identifier).await
    }

    /// Creates a table inside `keyspace`. The authority rejects the request
    /// when the keyspace does not resolve.
    ///
    /// # Errors
    ///
    /// Anything the authority's
    /// [`create_table_if_absent`](NamingAuthority::create_table_if_absent) returns.
    pub async fn create_table(&mut self, keyspace: &Identifier, table: &Identifier) -> NamingResult<()> {
        tracing::debug!(keyspace = %keyspace, table = %table, "create table");
        self.authority.create_table_if_absent(keyspace, table).await
    }

    /// Looks `identifier` up and records whether it was found. Absence is
    /// `Ok(None)`, never an error.
    ///
    /// # Errors
    ///
    /// Only when the authority could not answer.
    pub async fn lookup_identifier(
        &mut self,
        identifier: &Identifier,
    ) -> NamingResult<Option<KeyspaceMetadata>> {
        let metadata = self.authority.lookup(identifier).await?;
        let found = metadata.is_some();
        tracing::debug!(keyspace = %identifier, found, "lookup");
        self.observations.record(identifier.clone(), found);
        Ok(metadata)
    }

    /// Whether `a` and `b` resolve to different entries. One present and one
    /// absent counts as distinct; both absent does not.
    ///
    /// # Errors
    ///
    /// Only when the authority could not answer either lookup.
    pub async fn identifiers_distinct(&mut self, a: &Identifier, b: &Identifier) -> NamingResult<bool> {
        let first = self.lookup_identifier(a).await?;
        let second = self.lookup_identifier(b).await?;
        Ok(first != second)
    }

    /// Every identifier the authority knows, by its stored spelling.
    ///
    /// # Errors
    ///
    /// Only when the authority could not answer.
    pub async fn list_identifiers(&self) -> NamingResult<BTreeSet<String>> {
        self.authority.list_all().await
    }

    /// The lookups made so far.
    #[must_use]
    pub fn observations(&self) -> &ObservationResult {
        &self.observations
    }

    /// Consumes the checker, returning its lookup log.
    #[must_use]
    pub fn into_observations(self) -> ObservationResult {
        self.observations
    }
}

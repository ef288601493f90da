//! In-memory naming authority.
//!
//! [`MemoryAuthority`] applies the same folding and quoting rules as a CQL
//! server, without one. It is the authority hermetic tests run against.
//!
//! # Features
//!
//! - **Thread-safe**: Uses [`parking_lot::RwLock`] for concurrent access
//! - **Ordered**: Keyspaces live in a [`BTreeMap`], so enumeration is sorted
//! - **Failure injection**: [`disconnect`](MemoryAuthority::disconnect) makes
//!   every request fail with a connection error; the `authority-unreachable`
//!   fail point does the same under the `failpoints` feature
//!
//! # Example
//!
//! ```
//! use keyspace_naming::{Identifier, MemoryAuthority, NamingAuthority};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let authority = MemoryAuthority::new();
//! authority.create_if_absent(&Identifier::unquoted("camelCaseName")).await.unwrap();
//!
//! let found = authority.lookup(&Identifier::unquoted("CAMELCASENAME")).await.unwrap();
//! assert_eq!(found.map(|ks| ks.name().to_owned()), Some("camelcasename".to_owned()));
//! # });
//! ```

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use async_trait::async_trait;
use fail::fail_point;
use parking_lot::RwLock;

use crate::{
    authority::{AuthorityFactory, NamingAuthority},
    error::{NamingError, NamingResult},
    identifier::Identifier,
    metadata::{KeyspaceMetadata, Replication},
};

/// In-memory authority keyed by normalized keyspace name.
///
/// # Cloning
///
/// `MemoryAuthority` is cheaply cloneable via [`Arc`]. All clones share the
/// same keyspaces and the same reachability flag.
#[derive(Clone)]
pub struct MemoryAuthority {
    keyspaces: Arc<RwLock<BTreeMap<String, KeyspaceMetadata>>>,
    reachable: Arc<AtomicBool>,
    replication: Replication,
}

impl std::fmt::Debug for MemoryAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryAuthority")
            .field("keyspaces", &self.keyspaces.read().len())
            .field("reachable", &self.is_reachable())
            .field("replication", &self.replication)
            .finish()
    }
}

impl MemoryAuthority {
    /// Creates an empty, reachable authority using the default replication.
    pub fn new() -> Self {
        Self::with_replication(Replication::default())
    }

    /// Creates an empty authority that records `replication` on every new
    /// keyspace.
    pub fn with_replication(replication: Replication) -> Self {
        Self {
            keyspaces: Arc::new(RwLock::new(BTreeMap::new())),
            reachable: Arc::new(AtomicBool::new(true)),
            replication,
        }
    }

    /// Makes every subsequent request fail with [`NamingError::Connection`].
    pub fn disconnect(&self) {
        self.reachable.store(false, Ordering::Release);
    }

    /// Undoes [`disconnect`](Self::disconnect).
    pub fn reconnect(&self) {
        self.reachable.store(true, Ordering::Release);
    }

    /// Whether requests currently succeed.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.reachable.load(Ordering::Acquire)
    }

    /// Number of stored keyspaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keyspaces.read().len()
    }

    /// Whether no keyspace is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyspaces.read().is_empty()
    }

    fn ensure_reachable(&self, operation: &'static str) -> NamingResult<()> {
        fail_point!("authority-unreachable", |_| {
            Err(NamingError::connection(format!("fail point hit during {operation}")))
        });

        if self.is_reachable() {
            Ok(())
        } else {
            Err(NamingError::connection(format!("memory authority disconnected during {operation}")))
        }
    }
}

impl Default for MemoryAuthority {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NamingAuthority for MemoryAuthority {
    #[tracing::instrument(skip_all, fields(keyspace = %keyspace))]
    async fn create_if_absent(&self, keyspace: &Identifier) -> NamingResult<()> {
        keyspace.validate()?;
        self.ensure_reachable("create_if_absent")?;

        let name = keyspace.normalized();
        let mut keyspaces = self.keyspaces.write();
        if keyspaces.contains_key(&name) {
            tracing::debug!(stored = %name, "keyspace already exists");
        } else {
            tracing::debug!(stored = %name, "keyspace created");
            keyspaces.insert(name.clone(), KeyspaceMetadata::new(name, self.replication.clone()));
        }
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(keyspace = %keyspace, table = %table))]
    async fn create_table_if_absent(
        &self,
        keyspace: &Identifier,
        table: &Identifier,
    ) -> NamingResult<()> {
        keyspace.validate()?;
        table.validate()?;
        self.ensure_reachable("create_table_if_absent")?;

        let mut keyspaces = self.keyspaces.write();
        let Some(metadata) = keyspaces.get_mut(&keyspace.normalized()) else {
            return Err(NamingError::query(format!(
                "Keyspace {} doesn't exist",
                keyspace.normalized()
            )));
        };
        if metadata.insert_table(table.normalized()) {
            tracing::debug!(stored = %table.normalized(), "table created");
        }
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(keyspace = %keyspace))]
    async fn lookup(&self, keyspace: &Identifier) -> NamingResult<Option<KeyspaceMetadata>> {
        self.ensure_reachable("lookup")?;
        Ok(self.keyspaces.read().get(&keyspace.normalized()).cloned())
    }

    #[tracing::instrument(skip_all)]
    async fn list_all(&self) -> NamingResult<BTreeSet<String>> {
        self.ensure_reachable("list_all")?;
        Ok(self.keyspaces.read().keys().cloned().collect())
    }

    #[tracing::instrument(skip_all, fields(keyspace = %keyspace))]
    async fn drop_if_exists(&self, keyspace: &Identifier) -> NamingResult<()> {
        self.ensure_reachable("drop_if_exists")?;
        self.keyspaces.write().remove(&keyspace.normalized());
        Ok(())
    }

    #[tracing::instrument(skip_all)]
    async fn health_check(&self) -> NamingResult<()> {
        self.ensure_reachable("health_check")
    }
}

/// Provisions a brand-new [`MemoryAuthority`] per scenario.
#[derive(Debug, Clone, Default)]
pub struct MemoryAuthorityFactory {
    replication: Replication,
}

impl MemoryAuthorityFactory {
    /// Factory whose authorities record `replication` on new keyspaces.
    #[must_use]
    pub fn with_replication(replication: Replication) -> Self {
        Self { replication }
    }
}

#[async_trait]
impl AuthorityFactory for MemoryAuthorityFactory {
    type Authority = MemoryAuthority;

    async fn provision(&self) -> NamingResult<MemoryAuthority> {
        Ok(MemoryAuthority::with_replication(self.replication.clone()))
    }
}

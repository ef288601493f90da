//! Cassandra-backed naming authority.
//!
//! [`CassandraAuthority`] implements
//! [`NamingAuthority`](keyspace_naming::NamingAuthority) over one driver
//! session. Keyspaces are created and dropped with DDL and resolved through
//! `system_schema`, so every answer reflects what the server actually stored.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use async_trait::async_trait;
use keyspace_naming::{
    AuthorityFactory, Identifier, KeyspaceMetadata, NamingAuthority, NamingResult, Replication,
    provision_clean,
};
use scylla::client::{
    execution_profile::ExecutionProfile, session::Session, session_builder::SessionBuilder,
};

use crate::{config::CassandraAuthorityConfig, cql, error::Result};

/// Cassandra-backed implementation of [`NamingAuthority`].
///
/// # Connection lifetime
///
/// The session opens in [`connect`](Self::connect) and closes when the
/// authority is dropped. Nothing is shared between authorities.
///
/// # Example
///
/// ```no_run
/// use keyspace_naming::{Identifier, NamingAuthority};
/// use keyspace_naming_cassandra::{CassandraAuthority, CassandraAuthorityConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = CassandraAuthorityConfig::builder().contact_points(["127.0.0.1"]).build()?;
///     let authority = CassandraAuthority::connect(config).await?;
///
///     authority.create_if_absent(&Identifier::quoted("myKeyspace")).await?;
///     assert!(authority.lookup(&Identifier::quoted("mykeyspace")).await?.is_none());
///
///     Ok(())
/// }
/// ```
pub struct CassandraAuthority {
    session: Session,
    config: CassandraAuthorityConfig,
}

impl std::fmt::Debug for CassandraAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CassandraAuthority").field("config", &self.config).finish_non_exhaustive()
    }
}

impl CassandraAuthority {
    /// Opens a session to the configured cluster.
    ///
    /// # Errors
    ///
    /// Returns a connection error if no contact point could be reached
    /// within the connect timeout.
    #[tracing::instrument(skip_all, fields(contact_points = ?config.contact_points()))]
    pub async fn connect(config: CassandraAuthorityConfig) -> NamingResult<Self> {
        config.validate()?;
        let session = Self::open_session(&config).await?;
        tracing::info!(port = config.port(), "connected to Cassandra");
        Ok(Self { session, config })
    }

    async fn open_session(config: &CassandraAuthorityConfig) -> Result<Session> {
        let profile = ExecutionProfile::builder()
            .request_timeout(Some(config.request_timeout()))
            .build()
            .into_handle();

        let session = SessionBuilder::new()
            .known_nodes(config.known_nodes())
            .connection_timeout(config.connect_timeout())
            .default_execution_profile_handle(profile)
            .build()
            .await?;
        Ok(session)
    }

    /// The configuration this authority connected with.
    #[must_use]
    pub fn config(&self) -> &CassandraAuthorityConfig {
        &self.config
    }

    async fn execute(&self, statement: String) -> Result<()> {
        tracing::debug!(%statement, "executing");
        self.session.query_unpaged(statement, ()).await?;
        Ok(())
    }

    async fn fetch_keyspace(&self, name: &str) -> Result<Option<KeyspaceMetadata>> {
        let result = self.session.query_unpaged(cql::SELECT_KEYSPACE, (name,)).await?.into_rows_result()?;
        let Some(row) = result.rows::<(String, bool, HashMap<String, String>)>()?.next() else {
            return Ok(None);
        };
        let (stored, durable_writes, replication) = row?;

        let replication = Replication::from_map(replication.into_iter().collect::<BTreeMap<_, _>>())
            .unwrap_or_default();
        let tables = self.fetch_tables(&stored).await?;
        Ok(Some(
            KeyspaceMetadata::new(stored, replication)
                .with_durable_writes(durable_writes)
                .with_tables(tables),
        ))
    }

    async fn fetch_tables(&self, keyspace: &str) -> Result<Vec<String>> {
        let result = self.session.query_unpaged(cql::SELECT_TABLES, (keyspace,)).await?.into_rows_result()?;
        let mut tables = Vec::new();
        for row in result.rows::<(String,)>()? {
            let (table,) = row?;
            tables.push(table);
        }
        Ok(tables)
    }

    async fn fetch_keyspace_names(&self) -> Result<BTreeSet<String>> {
        let result = self.session.query_unpaged(cql::SELECT_KEYSPACE_NAMES, ()).await?.into_rows_result()?;
        let mut names = BTreeSet::new();
        for row in result.rows::<(String,)>()? {
            let (name,) = row?;
            if !cql::is_system_keyspace(&name) {
                names.insert(name);
            }
        }
        Ok(names)
    }
}

#[async_trait]
impl NamingAuthority for CassandraAuthority {
    #[tracing::instrument(skip_all, fields(keyspace = %keyspace))]
    async fn create_if_absent(&self, keyspace: &Identifier) -> NamingResult<()> {
        keyspace.validate()?;
        self.execute(cql::create_keyspace(keyspace, self.config.replication())).await?;
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
        self.execute(cql::create_table(keyspace, table)).await?;
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(keyspace = %keyspace))]
    async fn lookup(&self, keyspace: &Identifier) -> NamingResult<Option<KeyspaceMetadata>> {
        Ok(self.fetch_keyspace(&keyspace.normalized()).await?)
    }

    #[tracing::instrument(skip_all)]
    async fn list_all(&self) -> NamingResult<BTreeSet<String>> {
        Ok(self.fetch_keyspace_names().await?)
    }

    #[tracing::instrument(skip_all, fields(keyspace = %keyspace))]
    async fn drop_if_exists(&self, keyspace: &Identifier) -> NamingResult<()> {
        self.execute(cql::drop_keyspace(keyspace)).await?;
        Ok(())
    }

    #[tracing::instrument(skip_all)]
    async fn health_check(&self) -> NamingResult<()> {
        self.execute(cql::SELECT_RELEASE_VERSION.to_owned()).await?;
        Ok(())
    }
}

/// Connects a new [`CassandraAuthority`] per scenario and drops every user
/// keyspace before handing it out.
#[derive(Debug, Clone)]
pub struct CassandraAuthorityFactory {
    config: CassandraAuthorityConfig,
}

impl CassandraAuthorityFactory {
    /// Factory connecting with `config`.
    #[must_use]
    pub fn new(config: CassandraAuthorityConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl AuthorityFactory for CassandraAuthorityFactory {
    type Authority = CassandraAuthority;

    async fn provision(&self) -> NamingResult<CassandraAuthority> {
        let authority = CassandraAuthority::connect(self.config.clone()).await?;
        provision_clean(&authority).await?;
        Ok(authority)
    }
}

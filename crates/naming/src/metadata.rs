//! Keyspace metadata returned by lookups.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;

/// Replication options attached to a keyspace.
///
/// Rendered into the `WITH REPLICATION = {...}` clause of a
/// `CREATE KEYSPACE` statement. The default is `SimpleStrategy` with a
/// replication factor of 1, which is what a single-node test cluster needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replication {
    class: String,
    #[serde(flatten)]
    options: BTreeMap<String, String>,
}

impl Replication {
    /// `SimpleStrategy` with the given replication factor.
    #[must_use]
    pub fn simple(replication_factor: u32) -> Self {
        Self {
            class: "SimpleStrategy".to_owned(),
            options: BTreeMap::from([(
                "replication_factor".to_owned(),
                replication_factor.to_string(),
            )]),
        }
    }

    /// `NetworkTopologyStrategy` with a replication factor per datacenter.
    pub fn network_topology<I, S>(datacenters: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            class: "NetworkTopologyStrategy".to_owned(),
            options: datacenters.into_iter().map(|(dc, rf)| (dc.into(), rf.to_string())).collect(),
        }
    }

    /// Builds replication from the map an authority reports, where the
    /// strategy lives under the `class` key.
    ///
    /// Returns `None` when the map has no `class` entry.
    #[must_use]
    pub fn from_map(mut map: BTreeMap<String, String>) -> Option<Self> {
        let class = map.remove("class")?;
        Some(Self { class, options: map })
    }

    /// The replication strategy class.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Strategy options, excluding `class`.
    #[must_use]
    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Renders the CQL map literal, e.g.
    /// `{'class': 'SimpleStrategy', 'replication_factor': '1'}`.
    #[must_use]
    pub fn to_cql(&self) -> String {
        let mut entries = vec![format!("'class': {}", cql_string(&self.class))];
        entries.extend(
            self.options.iter().map(|(key, value)| format!("{}: {}", cql_string(key), cql_string(value))),
        );
        format!("{{{}}}", entries.join(", "))
    }
}

impl Default for Replication {
    fn default() -> Self {
        Self::simple(1)
    }
}

fn cql_string(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// What an authority knows about one keyspace.
///
/// Equality compares every field, so keyspaces with different stored names
/// are never equal even when everything else matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyspaceMetadata {
    name: String,
    replication: Replication,
    durable_writes: bool,
    tables: BTreeSet<String>,
}

impl KeyspaceMetadata {
    /// Metadata for a keyspace with no tables and durable writes enabled.
    pub fn new(name: impl Into<String>, replication: Replication) -> Self {
        Self { name: name.into(), replication, durable_writes: true, tables: BTreeSet::new() }
    }

    /// Replaces the durable-writes flag.
    #[must_use]
    pub fn with_durable_writes(mut self, durable_writes: bool) -> Self {
        self.durable_writes = durable_writes;
        self
    }

    /// Replaces the table set.
    #[must_use]
    pub fn with_tables(mut self, tables: impl IntoIterator<Item = String>) -> Self {
        self.tables = tables.into_iter().collect();
        self
    }

    /// The stored (post-folding) keyspace name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The keyspace's replication options.
    #[must_use]
    pub fn replication(&self) -> &Replication {
        &self.replication
    }

    /// Whether writes go through the commit log.
    #[must_use]
    pub fn durable_writes(&self) -> bool {
        self.durable_writes
    }

    /// Stored table names.
    #[must_use]
    pub fn tables(&self) -> &BTreeSet<String> {
        &self.tables
    }

    /// Whether a table resolves under the same folding rules as keyspaces.
    #[must_use]
    pub fn has_table(&self, table: &Identifier) -> bool {
        self.tables.contains(&table.normalized())
    }

    pub(crate) fn insert_table(&mut self, table: String) -> bool {
        self.tables.insert(table)
    }
}

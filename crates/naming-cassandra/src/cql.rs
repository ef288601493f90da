//! CQL statement text for keyspace management.
//!
//! Identifiers are spliced in through [`Identifier::to_cql`], so quoted
//! names keep their case on the server and unquoted names fold there.
//! Lookups bind the normalized name as a value against `system_schema`.

use keyspace_naming::{Identifier, Replication};

/// Prefix shared by every keyspace the server owns, e.g. `system_schema`
/// or ScyllaDB's `system_distributed_everywhere`.
pub const SYSTEM_KEYSPACE_PREFIX: &str = "system";

pub(crate) const SELECT_KEYSPACE: &str = "SELECT keyspace_name, durable_writes, replication \
     FROM system_schema.keyspaces WHERE keyspace_name = ?";

pub(crate) const SELECT_TABLES: &str =
    "SELECT table_name FROM system_schema.tables WHERE keyspace_name = ?";

pub(crate) const SELECT_KEYSPACE_NAMES: &str = "SELECT keyspace_name FROM system_schema.keyspaces";

pub(crate) const SELECT_RELEASE_VERSION: &str = "SELECT release_version FROM system.local";

/// Whether `name` is one of the server's own keyspaces.
#[must_use]
pub fn is_system_keyspace(name: &str) -> bool {
    name.starts_with(SYSTEM_KEYSPACE_PREFIX)
}

pub(crate) fn create_keyspace(keyspace: &Identifier, replication: &Replication) -> String {
    format!(
        "CREATE KEYSPACE IF NOT EXISTS {} WITH REPLICATION = {}",
        keyspace.to_cql(),
        replication.to_cql()
    )
}

pub(crate) fn create_table(keyspace: &Identifier, table: &Identifier) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {}.{} (mykey text, myvalue text, PRIMARY KEY (mykey))",
        keyspace.to_cql(),
        table.to_cql()
    )
}

pub(crate) fn drop_keyspace(keyspace: &Identifier) -> String {
    format!("DROP KEYSPACE IF EXISTS {}", keyspace.to_cql())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_keyspace_keeps_quotes() {
        assert_eq!(
            create_keyspace(&Identifier::quoted("myKeyspace"), &Replication::default()),
            "CREATE KEYSPACE IF NOT EXISTS \"myKeyspace\" WITH REPLICATION = \
             {'class': 'SimpleStrategy', 'replication_factor': '1'}"
        );
    }

    #[test]
    fn create_keyspace_leaves_unquoted_name_bare() {
        let statement = create_keyspace(&Identifier::unquoted("camelCaseName"), &Replication::simple(3));
        assert!(statement.starts_with("CREATE KEYSPACE IF NOT EXISTS camelCaseName WITH"));
        assert!(statement.ends_with("'replication_factor': '3'}"));
    }

    #[test]
    fn create_table_qualifies_with_keyspace() {
        assert_eq!(
            create_table(&Identifier::quoted("myKeyspace"), &Identifier::quoted("myTable")),
            "CREATE TABLE IF NOT EXISTS \"myKeyspace\".\"myTable\" \
             (mykey text, myvalue text, PRIMARY KEY (mykey))"
        );
    }

    #[test]
    fn drop_keyspace_addresses_exact_name() {
        assert_eq!(drop_keyspace(&Identifier::quoted("MYKEYSPACE")), "DROP KEYSPACE IF EXISTS \"MYKEYSPACE\"");
    }

    #[test]
    fn system_keyspaces_are_recognized() {
        assert!(is_system_keyspace("system_schema"));
        assert!(!is_system_keyspace("mykeyspace"));
        assert!(!is_system_keyspace("System"));
    }

    #[test]
    fn system_keyspaces_match_by_prefix() {
        for name in [
            "system",
            "system_auth",
            "system_distributed_everywhere",
            "system_cluster_metadata",
            "system_replicated_keys",
        ] {
            assert!(is_system_keyspace(name), "{name} should be filtered");
        }
        assert!(!is_system_keyspace("my_system"));
        assert!(!is_system_keyspace("SYSTEM_quoted"));
    }
}

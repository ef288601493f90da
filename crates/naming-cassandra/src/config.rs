//! Configuration for the Cassandra naming authority.
//!
//! [`CassandraAuthorityConfig`] names the cluster to connect to, how long to
//! wait for it, and the replication every created keyspace gets.

use std::{env, time::Duration};

use keyspace_naming::Replication;
use serde::{Deserialize, Serialize};

use crate::error::{CassandraAuthorityError, Result};

/// Default native-protocol port of the test cluster.
pub const DEFAULT_PORT: u16 = 9043;

/// Default request timeout (30 seconds).
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (5 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable holding comma-separated contact points.
pub const CONTACT_POINTS_ENV: &str = "CASSANDRA_CONTACT_POINTS";

/// Environment variable holding the native-protocol port.
pub const PORT_ENV: &str = "CASSANDRA_PORT";

/// Configuration for [`CassandraAuthority`](crate::CassandraAuthority).
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
///
/// use keyspace_naming_cassandra::CassandraAuthorityConfig;
///
/// let config = CassandraAuthorityConfig::builder()
///     .contact_points(["127.0.0.1"])
///     .port(9042)
///     .request_timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CassandraAuthorityConfig {
    /// Hostnames or addresses of cluster nodes.
    pub(crate) contact_points: Vec<String>,

    /// Native-protocol port shared by every contact point.
    #[serde(default = "default_port")]
    pub(crate) port: u16,

    /// Connection timeout.
    #[serde(with = "humantime_serde", default = "default_connect_timeout")]
    pub(crate) connect_timeout: Duration,

    /// Request timeout.
    #[serde(with = "humantime_serde", default = "default_request_timeout")]
    pub(crate) request_timeout: Duration,

    /// Replication for created keyspaces.
    #[serde(default)]
    pub(crate) replication: Replication,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_connect_timeout() -> Duration {
    DEFAULT_CONNECT_TIMEOUT
}

fn default_request_timeout() -> Duration {
    DEFAULT_REQUEST_TIMEOUT
}

#[bon::bon]
impl CassandraAuthorityConfig {
    /// Creates a new configuration, validating all required fields.
    ///
    /// # Arguments
    ///
    /// * `contact_points` - Cluster nodes to bootstrap from. At least one must be provided.
    ///
    /// # Optional Fields
    ///
    /// * `port` - Native-protocol port (default: 9043).
    /// * `connect_timeout` - Connection timeout (default: 5 seconds).
    /// * `request_timeout` - Request timeout (default: 30 seconds).
    /// * `replication` - Replication for created keyspaces (default: `SimpleStrategy`, factor 1).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No contact points are provided
    /// - A contact point is blank
    /// - The port is zero
    #[builder]
    pub fn new(
        #[builder(with = |iter: impl IntoIterator<Item = impl Into<String>>| {
            iter.into_iter().map(Into::into).collect()
        })]
        contact_points: Vec<String>,
        #[builder(default = DEFAULT_PORT)] port: u16,
        #[builder(default = DEFAULT_CONNECT_TIMEOUT)] connect_timeout: Duration,
        #[builder(default = DEFAULT_REQUEST_TIMEOUT)] request_timeout: Duration,
        #[builder(default)] replication: Replication,
    ) -> Result<Self> {
        let config = Self { contact_points, port, connect_timeout, request_timeout, replication };
        config.validate()?;
        Ok(config)
    }

    /// Reads contact points from `CASSANDRA_CONTACT_POINTS` and the port from
    /// `CASSANDRA_PORT`, defaulting to `127.0.0.1` and [`DEFAULT_PORT`].
    ///
    /// # Errors
    ///
    /// Returns an error if `CASSANDRA_PORT` is not a port number, or the
    /// resulting configuration fails validation.
    pub fn from_env() -> Result<Self> {
        let contact_points = env::var(CONTACT_POINTS_ENV).unwrap_or_else(|_| "127.0.0.1".to_owned());
        let port = match env::var(PORT_ENV) {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                CassandraAuthorityError::Config(format!("{PORT_ENV} is not a port number: {raw:?}"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Self::builder()
            .contact_points(contact_points.split(',').map(str::trim).filter(|s| !s.is_empty()))
            .port(port)
            .build()
    }

    /// Checks a configuration, e.g. one that was deserialized.
    ///
    /// # Errors
    ///
    /// Returns [`CassandraAuthorityError::Config`] naming the first problem.
    pub fn validate(&self) -> Result<()> {
        if self.contact_points.is_empty() {
            return Err(CassandraAuthorityError::Config(
                "at least one contact point is required".into(),
            ));
        }

        if self.contact_points.iter().any(|point| point.trim().is_empty()) {
            return Err(CassandraAuthorityError::Config("contact points cannot be blank".into()));
        }

        if self.port == 0 {
            return Err(CassandraAuthorityError::Config("port cannot be zero".into()));
        }

        Ok(())
    }

    /// Returns the configured contact points.
    #[must_use]
    pub fn contact_points(&self) -> &[String] {
        &self.contact_points
    }

    /// Returns the native-protocol port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the connection timeout.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the replication applied to created keyspaces.
    #[must_use]
    pub fn replication(&self) -> &Replication {
        &self.replication
    }

    /// `host:port` for every contact point, as the driver expects them.
    pub(crate) fn known_nodes(&self) -> Vec<String> {
        self.contact_points.iter().map(|host| format!("{host}:{}", self.port)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config_uses_defaults() {
        let config = CassandraAuthorityConfig::builder().contact_points(["127.0.0.1"]).build().unwrap();

        assert_eq!(config.contact_points(), &["127.0.0.1"]);
        assert_eq!(config.port(), DEFAULT_PORT);
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.replication(), &Replication::simple(1));
    }

    #[test]
    fn test_validation_empty_contact_points() {
        let result = CassandraAuthorityConfig::builder().contact_points(Vec::<String>::new()).build();
        assert!(matches!(result, Err(CassandraAuthorityError::Config(_))));
    }

    #[test]
    fn test_validation_blank_contact_point() {
        let result = CassandraAuthorityConfig::builder().contact_points(["node1", "  "]).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_zero_port() {
        let result = CassandraAuthorityConfig::builder().contact_points(["node1"]).port(0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_known_nodes_append_port() {
        let config = CassandraAuthorityConfig::builder()
            .contact_points(["node1", "10.0.0.2"])
            .port(9042)
            .build()
            .unwrap();

        assert_eq!(config.known_nodes(), vec!["node1:9042".to_owned(), "10.0.0.2:9042".to_owned()]);
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let config: CassandraAuthorityConfig =
            serde_json::from_str(r#"{"contact_points": ["127.0.0.1"]}"#).unwrap();

        assert_eq!(config.port(), DEFAULT_PORT);
        assert_eq!(config.request_timeout(), DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.replication(), &Replication::default());
        config.validate().unwrap();
    }

    #[test]
    fn test_deserialize_humantime_and_replication() {
        let config: CassandraAuthorityConfig = serde_json::from_str(
            r#"{
                "contact_points": ["a", "b"],
                "port": 9042,
                "connect_timeout": "2s",
                "request_timeout": "1m 30s",
                "replication": {"class": "NetworkTopologyStrategy", "dc1": "3"}
            }"#,
        )
        .unwrap();

        assert_eq!(config.connect_timeout(), Duration::from_secs(2));
        assert_eq!(config.request_timeout(), Duration::from_secs(90));
        assert_eq!(config.replication(), &Replication::network_topology([("dc1", 3)]));
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: std::result::Result<CassandraAuthorityConfig, _> =
            serde_json::from_str(r#"{"contact_points": ["a"], "keyspace": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialized_empty_contact_points_fail_validation() {
        let config: CassandraAuthorityConfig =
            serde_json::from_str(r#"{"contact_points": []}"#).unwrap();
        assert!(config.validate().is_err());
    }
}

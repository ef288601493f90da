//! Cassandra naming authority for the keyspace naming conformance harness.
//!
//! This crate provides [`CassandraAuthority`], which implements
//! [`NamingAuthority`](keyspace_naming::NamingAuthority) against a live
//! cluster through the `scylla` CQL driver, and
//! [`CassandraAuthorityFactory`], which hands each scenario its own session
//! after clearing out every user keyspace.
//!
//! # Quick Start
//!
//! ```no_run
//! use keyspace_naming::{RunSummary, Scenario, run_scenarios};
//! use keyspace_naming_cassandra::{CassandraAuthorityConfig, CassandraAuthorityFactory};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CassandraAuthorityConfig::from_env()?;
//!     let reports = run_scenarios(&CassandraAuthorityFactory::new(config), &Scenario::ALL).await;
//!
//!     let summary = RunSummary::from_reports(&reports);
//!     println!("{} passed, {} failed, {} inconclusive", summary.passed, summary.failed, summary.inconclusive);
//!     Ok(())
//! }
//! ```
//!
//! # Error Mapping
//!
//! | Driver error | [`NamingError`](keyspace_naming::NamingError) |
//! |--------------|-----------------------------------------------|
//! | Session could not open | `Connection` |
//! | Request timeout | `Timeout` |
//! | No reachable node, broken connection, unavailable replicas | `Connection` |
//! | Server rejected the statement | `Query` |
//! | Unexpected result shape | `Internal` |

#![deny(unsafe_code)]

mod authority;
mod config;
mod cql;
mod error;

pub use authority::{CassandraAuthority, CassandraAuthorityFactory};
pub use config::{CONTACT_POINTS_ENV, CassandraAuthorityConfig, DEFAULT_PORT, PORT_ENV};
pub use cql::{SYSTEM_KEYSPACE_PREFIX, is_system_keyspace};
pub use error::{CassandraAuthorityError, Result};

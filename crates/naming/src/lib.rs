//! Conformance harness for CQL keyspace identifier folding and quoting.
//!
//! CQL folds unquoted identifiers to lowercase and keeps quoted identifiers
//! exactly as written. This crate creates and looks up keyspaces through a
//! [`NamingAuthority`] and checks that the authority honors those rules.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Scenarios / conformance suite               │
//! │        (run_scenarios, conformance::*, ScenarioReport)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  NamingConformanceChecker                   │
//! │   (create_identifier, lookup_identifier, observation log)   │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    NamingAuthority trait                    │
//! │     (create_if_absent, lookup, list_all, drop_if_exists)    │
//! ├──────────────────┬──────────────────────────────────────────┤
//! │ MemoryAuthority  │   CassandraAuthority                     │
//! │   (hermetic)     │   (keyspace-naming-cassandra)            │
//! └──────────────────┴──────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use keyspace_naming::{Identifier, MemoryAuthority, NamingAuthority};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let authority = MemoryAuthority::new();
//!
//!     // Quoted: stored exactly as written.
//!     authority.create_if_absent(&Identifier::quoted("myKeyspace")).await?;
//!     assert!(authority.lookup(&Identifier::quoted("myKeyspace")).await?.is_some());
//!     assert!(authority.lookup(&Identifier::quoted("mykeyspace")).await?.is_none());
//!
//!     // Unquoted: folded to lowercase on the way in and on lookup.
//!     authority.create_if_absent(&Identifier::unquoted("OtherKeyspace")).await?;
//!     assert!(authority.lookup(&Identifier::unquoted("OTHERKEYSPACE")).await?.is_some());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Running Scenarios
//!
//! [`run_scenarios`] provisions a fresh authority per [`Scenario`] through an
//! [`AuthorityFactory`] and reports each as passed, failed, or inconclusive.
//!
//! ```
//! use keyspace_naming::{MemoryAuthorityFactory, RunSummary, Scenario, run_scenarios};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let reports = run_scenarios(&MemoryAuthorityFactory::default(), &Scenario::ALL).await;
//! assert_eq!(RunSummary::from_reports(&reports).failed, 0);
//! # });
//! ```
//!
//! # Feature Flags
//!
//! - **`testutil`**: Enables the `testutil` and `conformance` modules (fixtures, assertion macros,
//!   and the suite authority crates run from their integration tests).
//! - **`failpoints`**: Activates the `authority-unreachable` fail point in [`MemoryAuthority`].

#![deny(unsafe_code)]

pub mod authority;
pub mod checker;
#[cfg(any(test, feature = "testutil"))]
#[allow(clippy::panic)]
pub mod conformance;
pub mod error;
pub mod identifier;
pub mod memory;
pub mod metadata;
pub mod observation;
pub mod scenario;
#[cfg(any(test, feature = "testutil"))]
#[allow(clippy::expect_used, clippy::panic)]
pub mod testutil;

// Re-export primary types at crate root for convenience
pub use authority::{AuthorityFactory, NamingAuthority, provision_clean};
pub use checker::NamingConformanceChecker;
pub use error::{BoxError, NamingError, NamingResult};
pub use identifier::{Identifier, MAX_IDENTIFIER_LENGTH, swap_case};
pub use memory::{MemoryAuthority, MemoryAuthorityFactory};
pub use metadata::{KeyspaceMetadata, Replication};
pub use observation::{Observation, ObservationResult};
pub use scenario::{
    AssertionFailure, RunSummary, Scenario, ScenarioError, ScenarioOutcome, ScenarioReport,
    run_scenarios,
};

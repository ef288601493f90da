//! Behavior when no Cassandra node is listening.
//!
//! Port 1 on loopback refuses connections, so these run without a cluster.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::time::Duration;

use keyspace_naming::{RunSummary, Scenario, assert_infrastructure, run_scenarios};
use keyspace_naming_cassandra::{
    CassandraAuthority, CassandraAuthorityConfig, CassandraAuthorityFactory,
};

fn refused_config() -> CassandraAuthorityConfig {
    CassandraAuthorityConfig::builder()
        .contact_points(["127.0.0.1"])
        .port(1)
        .connect_timeout(Duration::from_secs(1))
        .build()
        .unwrap()
}

#[tokio::test]
async fn connect_to_refused_port_is_infrastructure_error() {
    let result = CassandraAuthority::connect(refused_config()).await;
    assert_infrastructure!(result);
}

#[tokio::test]
async fn scenarios_against_refused_port_are_inconclusive() {
    let factory = CassandraAuthorityFactory::new(refused_config());
    let scenarios = [Scenario::BasicCreation, Scenario::CreateUpperCheckLower];

    let reports = run_scenarios(&factory, &scenarios).await;

    assert_eq!(RunSummary::from_reports(&reports), RunSummary {
        passed: 0,
        failed: 0,
        inconclusive: scenarios.len()
    });
}

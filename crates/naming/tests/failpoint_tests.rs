#![allow(clippy::expect_used, clippy::panic)]
//! Integration tests for fail-point injection.
//!
//! These tests require the `failpoints` feature:
//! ```bash
//! cargo test -p keyspace-naming --features failpoints --test failpoint_tests
//! ```

use keyspace_naming::{
    Identifier, MemoryAuthority, MemoryAuthorityFactory, NamingAuthority, NamingError, Scenario,
    run_scenarios,
};

#[tokio::test]
async fn unreachable_failpoint_returns_connection_error() {
    let scenario = fail::FailScenario::setup();
    fail::cfg("authority-unreachable", "return").expect("failed to configure fail point");

    let authority = MemoryAuthority::new();
    let result = authority.lookup(&Identifier::quoted("mykeyspace")).await;

    assert!(matches!(result, Err(NamingError::Connection { .. })), "got {result:?}");

    scenario.teardown();
}

#[tokio::test]
async fn unreachable_failpoint_makes_scenarios_inconclusive() {
    let scenario = fail::FailScenario::setup();
    fail::cfg("authority-unreachable", "return").expect("failed to configure fail point");

    let reports = run_scenarios(&MemoryAuthorityFactory::default(), &Scenario::ALL).await;
    for report in &reports {
        assert!(report.outcome.is_inconclusive(), "{}: {:?}", report.scenario, report.outcome);
    }

    scenario.teardown();
}

#[tokio::test]
async fn failpoint_after_creation_interrupts_lookup() {
    let scenario = fail::FailScenario::setup();

    let authority = MemoryAuthority::new();
    let keyspace = Identifier::quoted("mykeyspace");
    authority.create_if_absent(&keyspace).await.expect("create before fail point");

    fail::cfg("authority-unreachable", "return").expect("failed to configure fail point");
    assert!(authority.lookup(&keyspace).await.is_err());

    fail::remove("authority-unreachable");
    assert!(authority.lookup(&keyspace).await.expect("lookup after removal").is_some());

    scenario.teardown();
}

#[tokio::test]
async fn without_failpoint_operations_succeed() {
    let scenario = fail::FailScenario::setup();

    let authority = MemoryAuthority::new();
    let result = authority.health_check().await;

    assert!(result.is_ok(), "health check should succeed without fail point");

    scenario.teardown();
}

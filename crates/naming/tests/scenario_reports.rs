//! Scenario runner reporting across healthy and unreachable authorities.

#![allow(clippy::expect_used, clippy::panic)]

use async_trait::async_trait;
use keyspace_naming::{
    AuthorityFactory, Identifier, MemoryAuthority, MemoryAuthorityFactory, NamingError, NamingResult,
    RunSummary, Scenario, ScenarioOutcome, run_scenarios,
};

/// Hands out authorities that are already disconnected.
struct UnreachableFactory;

#[async_trait]
impl AuthorityFactory for UnreachableFactory {
    type Authority = MemoryAuthority;

    async fn provision(&self) -> NamingResult<MemoryAuthority> {
        let authority = MemoryAuthority::new();
        authority.disconnect();
        Ok(authority)
    }
}

/// Fails before any authority exists.
struct RefusingFactory;

#[async_trait]
impl AuthorityFactory for RefusingFactory {
    type Authority = MemoryAuthority;

    async fn provision(&self) -> NamingResult<MemoryAuthority> {
        Err(NamingError::connection("127.0.0.1:9043: connection refused"))
    }
}

/// Hands every scenario the same authority, as a never-reset server would.
struct SharedFactory(MemoryAuthority);

#[async_trait]
impl AuthorityFactory for SharedFactory {
    type Authority = MemoryAuthority;

    async fn provision(&self) -> NamingResult<MemoryAuthority> {
        Ok(self.0.clone())
    }
}

#[tokio::test]
async fn fresh_authorities_pass_every_scenario() {
    let reports = run_scenarios(&MemoryAuthorityFactory::default(), &Scenario::ALL).await;

    for report in &reports {
        assert!(report.outcome.is_passed(), "{}: {:?}", report.scenario, report.outcome);
    }
    let scenarios: Vec<_> = reports.iter().map(|r| r.scenario).collect();
    assert_eq!(scenarios, Scenario::ALL.to_vec());
}

#[tokio::test]
async fn unreachable_authorities_are_inconclusive_not_failed() {
    let reports = run_scenarios(&UnreachableFactory, &Scenario::ALL).await;

    let summary = RunSummary::from_reports(&reports);
    assert_eq!(summary, RunSummary { passed: 0, failed: 0, inconclusive: Scenario::ALL.len() });
    for report in &reports {
        assert!(
            matches!(report.outcome, ScenarioOutcome::Inconclusive(NamingError::Connection { .. })),
            "{}: {:?}",
            report.scenario,
            report.outcome
        );
    }
}

#[tokio::test]
async fn provisioning_failure_is_inconclusive() {
    let reports = run_scenarios(&RefusingFactory, &[Scenario::BasicCreation]).await;

    assert_eq!(reports.len(), 1);
    assert!(reports[0].outcome.is_inconclusive());
    assert!(reports[0].observations.is_empty());
}

#[tokio::test]
async fn shared_authority_makes_naive_check_fail() {
    let factory = SharedFactory(MemoryAuthority::new());
    let reports = run_scenarios(
        &factory,
        &[Scenario::CreateLowerCheckUpper, Scenario::CreateUpperCheckLower],
    )
    .await;

    assert!(reports[0].outcome.is_passed(), "{:?}", reports[0].outcome);
    assert!(reports[1].outcome.is_failed(), "{:?}", reports[1].outcome);
    assert_eq!(
        reports[1].observations.last_found(&Identifier::quoted("mykeyspace")),
        Some(true),
        "the first scenario's keyspace should still resolve"
    );
    let ScenarioOutcome::Failed(failure) = &reports[1].outcome else {
        panic!("expected the second scenario to fail, got {:?}", reports[1].outcome);
    };
    assert_eq!(failure.scenario, Scenario::CreateUpperCheckLower);
    assert_eq!(factory.0.len(), 2, "both spellings should be left behind");
}

#[tokio::test]
async fn failure_does_not_stop_the_run() {
    let factory = SharedFactory(MemoryAuthority::new());
    let order = [
        Scenario::CreateLowerCheckUpper,
        Scenario::CreateUpperCheckLower,
        Scenario::UnquotedFoldsOnLookup,
    ];
    let reports = run_scenarios(&factory, &order).await;

    assert_eq!(reports.len(), 3);
    assert_eq!(RunSummary::from_reports(&reports), RunSummary {
        passed: 2,
        failed: 1,
        inconclusive: 0
    });
}

//! Integration test verifying that `#[instrument]` annotations produce
//! spans named after each `MemoryAuthority` operation.

#![allow(clippy::expect_used)]

use std::sync::{Arc, Mutex};

use keyspace_naming::{
    Identifier, MemoryAuthority, MemoryAuthorityFactory, NamingAuthority, Scenario, run_scenarios,
};
use tracing::Subscriber;
use tracing_subscriber::{layer::SubscriberExt, registry::LookupSpan};

// ---------------------------------------------------------------------------
// Collecting layer
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
struct SpanCollector {
    spans: Arc<Mutex<Vec<String>>>,
}

impl<S> tracing_subscriber::Layer<S> for SpanCollector
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        _attrs: &tracing::span::Attributes<'_>,
        id: &tracing::span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if let Some(span) = ctx.span(id) {
            self.spans.lock().expect("lock poisoned").push(span.name().to_owned());
        }
    }
}

fn install() -> (Arc<Mutex<Vec<String>>>, tracing::subscriber::DefaultGuard) {
    let collector = SpanCollector::default();
    let spans = Arc::clone(&collector.spans);
    let guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(collector));
    (spans, guard)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn authority_operations_create_spans() {
    let (spans, _guard) = install();

    let authority = MemoryAuthority::new();
    let keyspace = Identifier::quoted("traced");
    authority.create_if_absent(&keyspace).await.expect("create");
    authority.create_table_if_absent(&keyspace, &Identifier::quoted("t")).await.expect("table");
    authority.lookup(&keyspace).await.expect("lookup");
    authority.list_all().await.expect("list");
    authority.drop_if_exists(&keyspace).await.expect("drop");
    authority.health_check().await.expect("health");

    let recorded = spans.lock().expect("lock poisoned");
    for name in [
        "create_if_absent",
        "create_table_if_absent",
        "lookup",
        "list_all",
        "drop_if_exists",
        "health_check",
    ] {
        assert!(recorded.iter().any(|s| s == name), "expected a '{name}' span, got: {recorded:?}");
    }
}

#[tokio::test]
async fn runner_opens_one_span_per_scenario() {
    let (spans, _guard) = install();

    let scenarios = [Scenario::BasicCreation, Scenario::QuotedOppositeCaseAbsent];
    let reports = run_scenarios(&MemoryAuthorityFactory::default(), &scenarios).await;
    assert_eq!(reports.len(), 2);

    let recorded = spans.lock().expect("lock poisoned");
    let scenario_spans = recorded.iter().filter(|s| *s == "scenario").count();
    assert_eq!(scenario_spans, scenarios.len(), "got: {recorded:?}");
}

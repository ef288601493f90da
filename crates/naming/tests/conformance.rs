//! Conformance suite for `MemoryAuthority`.
//!
//! One test per conformance check so a regression names the rule it broke.
//! The `run_all` test makes sure no check is left out.

#![allow(clippy::expect_used, clippy::panic)]

use keyspace_naming::{MemoryAuthority, MemoryAuthorityFactory, NamingResult, conformance};

// ============================================================================
// Scenarios (13 tests)
// ============================================================================

#[tokio::test]
async fn basic_creation() -> NamingResult<()> {
    conformance::basic_creation(&MemoryAuthority::new()).await
}

#[tokio::test]
async fn camel_case_creation() -> NamingResult<()> {
    conformance::camel_case_creation(&MemoryAuthority::new()).await
}

#[tokio::test]
async fn keyspace_and_table_creation() -> NamingResult<()> {
    conformance::keyspace_and_table_creation(&MemoryAuthority::new()).await
}

#[tokio::test]
async fn create_upper_check_lower() -> NamingResult<()> {
    conformance::create_upper_check_lower(&MemoryAuthority::new()).await
}

#[tokio::test]
async fn create_lower_check_upper() -> NamingResult<()> {
    conformance::create_lower_check_upper(&MemoryAuthority::new()).await
}

#[tokio::test]
async fn quoted_case_variants_distinct() -> NamingResult<()> {
    conformance::quoted_case_variants_distinct(&MemoryAuthority::new()).await
}

#[tokio::test]
async fn quoted_upper_and_lower_both_present() -> NamingResult<()> {
    conformance::quoted_upper_and_lower_both_present(&MemoryAuthority::new()).await
}

#[tokio::test]
async fn both_spellings_actually_created() -> NamingResult<()> {
    conformance::both_spellings_actually_created(&MemoryAuthority::new()).await
}

#[tokio::test]
async fn unquoted_folds_on_lookup() -> NamingResult<()> {
    conformance::unquoted_folds_on_lookup(&MemoryAuthority::new()).await
}

#[tokio::test]
async fn quoting_suppresses_folding_on_lookup() -> NamingResult<()> {
    conformance::quoting_suppresses_folding_on_lookup(&MemoryAuthority::new()).await
}

#[tokio::test]
async fn quoted_opposite_case_absent() -> NamingResult<()> {
    conformance::quoted_opposite_case_absent(&MemoryAuthority::new()).await
}

#[tokio::test]
async fn enumeration_matches_folding() -> NamingResult<()> {
    conformance::enumeration_matches_folding(&MemoryAuthority::new()).await
}

#[tokio::test]
async fn shared_authority_aliases_prior_spelling() -> NamingResult<()> {
    conformance::shared_authority_aliases_prior_spelling(&MemoryAuthority::new()).await
}

// ============================================================================
// Contract (5 tests)
// ============================================================================

#[tokio::test]
async fn create_is_idempotent() -> NamingResult<()> {
    conformance::create_is_idempotent(&MemoryAuthority::new()).await
}

#[tokio::test]
async fn lookup_missing_returns_none() -> NamingResult<()> {
    conformance::lookup_missing_returns_none(&MemoryAuthority::new()).await
}

#[tokio::test]
async fn invalid_identifier_rejected() -> NamingResult<()> {
    conformance::invalid_identifier_rejected(&MemoryAuthority::new()).await
}

#[tokio::test]
async fn max_length_identifier_accepted() -> NamingResult<()> {
    conformance::max_length_identifier_accepted(&MemoryAuthority::new()).await
}

#[tokio::test]
async fn create_table_in_missing_keyspace_is_rejected() -> NamingResult<()> {
    conformance::create_table_in_missing_keyspace_is_rejected(&MemoryAuthority::new()).await
}

// ============================================================================
// Full suite
// ============================================================================

#[tokio::test]
async fn run_all() -> NamingResult<()> {
    conformance::run_all(&MemoryAuthorityFactory::default()).await
}

#[tokio::test]
async fn disconnected_authority_errors_instead_of_failing() {
    let authority = MemoryAuthority::new();
    authority.disconnect();

    let result = conformance::create_upper_check_lower(&authority).await;
    keyspace_naming::assert_infrastructure!(result);
}

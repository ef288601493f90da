//! Conformance test suite for [`NamingAuthority`] implementations.
//!
//! Each function takes a freshly provisioned, empty authority and checks one
//! piece of the folding and quoting contract. The two failure kinds stay
//! separate:
//!
//! - a behavioral non-conformance **panics**, so the calling test fails;
//! - an unreachable authority is returned as `Err`, so the calling test
//!   errors instead of reporting a false regression.
//!
//! # Usage
//!
//! ```no_run
//! use keyspace_naming::{MemoryAuthority, NamingResult, conformance};
//!
//! #[tokio::test]
//! async fn create_upper_check_lower() -> NamingResult<()> {
//!     conformance::create_upper_check_lower(&MemoryAuthority::new()).await
//! }
//! ```
//!
//! # Test Categories
//!
//! | Category | Functions | Contract aspect |
//! |----------|-----------|-----------------|
//! | Scenarios | 13 tests | One per [`Scenario`] |
//! | Contract | 5 tests | Idempotence, absence, validation, table rules |

use crate::{
    authority::{AuthorityFactory, NamingAuthority},
    checker::NamingConformanceChecker,
    error::{NamingError, NamingResult},
    identifier::{Identifier, MAX_IDENTIFIER_LENGTH},
    scenario::{Scenario, ScenarioError},
};

async fn check<A>(scenario: Scenario, authority: &A) -> NamingResult<()>
where
    A: NamingAuthority + ?Sized,
{
    let mut checker = NamingConformanceChecker::new(authority);
    match scenario.run(&mut checker).await {
        Ok(()) => Ok(()),
        Err(ScenarioError::Assertion(failure)) => panic!("{failure}"),
        Err(ScenarioError::Infrastructure(err)) => Err(err),
    }
}

// ============================================================================
// Scenarios (13 tests)
// ============================================================================

/// A quoted lowercase keyspace can be created and found.
pub async fn basic_creation<A: NamingAuthority + ?Sized>(authority: &A) -> NamingResult<()> {
    check(Scenario::BasicCreation, authority).await
}

/// A quoted camel-case keyspace can be created and found.
pub async fn camel_case_creation<A: NamingAuthority + ?Sized>(authority: &A) -> NamingResult<()> {
    check(Scenario::CamelCaseCreation, authority).await
}

/// A quoted table in a quoted keyspace appears in the keyspace's metadata.
pub async fn keyspace_and_table_creation<A: NamingAuthority + ?Sized>(
    authority: &A,
) -> NamingResult<()> {
    check(Scenario::KeyspaceAndTableCreation, authority).await
}

/// Creating `"myKeyspace"` leaves `"mykeyspace"` absent.
pub async fn create_upper_check_lower<A: NamingAuthority + ?Sized>(
    authority: &A,
) -> NamingResult<()> {
    check(Scenario::CreateUpperCheckLower, authority).await
}

/// Creating `"mykeyspace"` leaves `"myKeyspace"` absent.
pub async fn create_lower_check_upper<A: NamingAuthority + ?Sized>(
    authority: &A,
) -> NamingResult<()> {
    check(Scenario::CreateLowerCheckUpper, authority).await
}

/// Quoted spellings differing only in case are distinct entries.
pub async fn quoted_case_variants_distinct<A: NamingAuthority + ?Sized>(
    authority: &A,
) -> NamingResult<()> {
    check(Scenario::QuotedCaseVariantsDistinct, authority).await
}

/// `"mykeyspace"` and `"MYKEYSPACE"` are both present and unequal.
pub async fn quoted_upper_and_lower_both_present<A: NamingAuthority + ?Sized>(
    authority: &A,
) -> NamingResult<()> {
    check(Scenario::QuotedUpperAndLowerBothPresent, authority).await
}

/// Both quoted spellings exist after sequential creation.
pub async fn both_spellings_actually_created<A: NamingAuthority + ?Sized>(
    authority: &A,
) -> NamingResult<()> {
    check(Scenario::BothSpellingsActuallyCreated, authority).await
}

/// An unquoted name resolves under every unquoted casing.
pub async fn unquoted_folds_on_lookup<A: NamingAuthority + ?Sized>(
    authority: &A,
) -> NamingResult<()> {
    check(Scenario::UnquotedFoldsOnLookup, authority).await
}

/// Quoting an uppercase spelling of a folded name does not find it.
pub async fn quoting_suppresses_folding_on_lookup<A: NamingAuthority + ?Sized>(
    authority: &A,
) -> NamingResult<()> {
    check(Scenario::QuotingSuppressesFoldingOnLookup, authority).await
}

/// A quoted mixed-case name is absent under its opposite case.
pub async fn quoted_opposite_case_absent<A: NamingAuthority + ?Sized>(
    authority: &A,
) -> NamingResult<()> {
    check(Scenario::QuotedOppositeCaseAbsent, authority).await
}

/// Enumeration equals the set of normalized names created.
pub async fn enumeration_matches_folding<A: NamingAuthority + ?Sized>(
    authority: &A,
) -> NamingResult<()> {
    check(Scenario::EnumerationMatchesFolding, authority).await
}

/// Reusing one authority across scenarios makes the naive absence check
/// fail.
pub async fn shared_authority_aliases_prior_spelling<A: NamingAuthority + ?Sized>(
    authority: &A,
) -> NamingResult<()> {
    check(Scenario::SharedAuthorityAliasesPriorSpelling, authority).await
}

// ============================================================================
// Contract (5 tests)
// ============================================================================

/// Creating an existing keyspace succeeds and leaves one entry.
pub async fn create_is_idempotent<A: NamingAuthority + ?Sized>(authority: &A) -> NamingResult<()> {
    let keyspace = Identifier::quoted("idempotent_ks");
    authority.create_if_absent(&keyspace).await?;
    authority.create_if_absent(&keyspace).await?;
    authority.create_if_absent(&Identifier::unquoted("IDEMPOTENT_KS")).await?;

    let listed = authority.list_all().await?;
    assert_eq!(listed.into_iter().collect::<Vec<_>>(), vec!["idempotent_ks".to_owned()]);
    Ok(())
}

/// Looking up a name that was never created is `Ok(None)`.
pub async fn lookup_missing_returns_none<A: NamingAuthority + ?Sized>(
    authority: &A,
) -> NamingResult<()> {
    for id in [Identifier::quoted("never_created"), Identifier::unquoted("Never_Created")] {
        let found = authority.lookup(&id).await?;
        assert!(found.is_none(), "{id} should be absent, got {found:?}");
    }
    Ok(())
}

/// Names breaking the naming rules are rejected as invalid, not created.
pub async fn invalid_identifier_rejected<A: NamingAuthority + ?Sized>(
    authority: &A,
) -> NamingResult<()> {
    let too_long = "k".repeat(MAX_IDENTIFIER_LENGTH + 1);
    for id in [Identifier::quoted(""), Identifier::quoted("has space"), Identifier::unquoted(too_long)] {
        match authority.create_if_absent(&id).await {
            Err(NamingError::InvalidIdentifier { .. }) => {},
            Err(err) if err.is_infrastructure() => return Err(err),
            other => panic!("{id} should be rejected as invalid, got {other:?}"),
        }
    }
    assert!(authority.list_all().await?.is_empty(), "rejected names must not be stored");
    Ok(())
}

/// A name of exactly the maximum length is accepted.
pub async fn max_length_identifier_accepted<A: NamingAuthority + ?Sized>(
    authority: &A,
) -> NamingResult<()> {
    let longest = Identifier::quoted("k".repeat(MAX_IDENTIFIER_LENGTH));
    authority.create_if_absent(&longest).await?;
    assert!(authority.lookup(&longest).await?.is_some(), "{longest} should be present");
    Ok(())
}

/// Creating a table in a keyspace that does not exist is a query error.
pub async fn create_table_in_missing_keyspace_is_rejected<A: NamingAuthority + ?Sized>(
    authority: &A,
) -> NamingResult<()> {
    let result =
        authority.create_table_if_absent(&Identifier::quoted("no_such_ks"), &Identifier::quoted("t")).await;
    match result {
        Err(NamingError::Query { .. }) => Ok(()),
        Err(err) if err.is_infrastructure() => Err(err),
        other => panic!("table creation in a missing keyspace should be rejected, got {other:?}"),
    }
}

// ============================================================================
// Full suite
// ============================================================================

/// Runs every conformance check, each against its own provisioned authority.
///
/// # Errors
///
/// Returns the first infrastructure failure.
pub async fn run_all<F: AuthorityFactory + ?Sized>(factory: &F) -> NamingResult<()> {
    basic_creation(&factory.provision().await?).await?;
    camel_case_creation(&factory.provision().await?).await?;
    keyspace_and_table_creation(&factory.provision().await?).await?;
    create_upper_check_lower(&factory.provision().await?).await?;
    create_lower_check_upper(&factory.provision().await?).await?;
    quoted_case_variants_distinct(&factory.provision().await?).await?;
    quoted_upper_and_lower_both_present(&factory.provision().await?).await?;
    both_spellings_actually_created(&factory.provision().await?).await?;
    unquoted_folds_on_lookup(&factory.provision().await?).await?;
    quoting_suppresses_folding_on_lookup(&factory.provision().await?).await?;
    quoted_opposite_case_absent(&factory.provision().await?).await?;
    enumeration_matches_folding(&factory.provision().await?).await?;
    shared_authority_aliases_prior_spelling(&factory.provision().await?).await?;

    create_is_idempotent(&factory.provision().await?).await?;
    lookup_missing_returns_none(&factory.provision().await?).await?;
    invalid_identifier_rejected(&factory.provision().await?).await?;
    max_length_identifier_accepted(&factory.provision().await?).await?;
    create_table_in_missing_keyspace_is_rejected(&factory.provision().await?).await?;
    Ok(())
}

use super::*;

/// Tests a guest appointment booked with the caller's phone in another format.
///
/// Expected: Allow after exactly one profile read
#[tokio::test]
async fn matches_formatted_phone() -> Result<(), AppError> {
    let profiles = StubProfiles::with(Some("0123456789"), Some("Jane Doe"));
    let resolver = OwnershipResolver::new(&profiles);

    let decision = resolver
        .resolve_access(&patient(3), &guest("J. Doe", "(012) 345-6789"))
        .await?;

    assert_eq!(decision, OwnershipDecision::Allow);
    assert_eq!(profiles.reads(), 1);

    Ok(())
}

/// Tests a guest appointment with the caller's name but a different phone.
///
/// Either field is sufficient on its own.
///
/// Expected: Allow
#[tokio::test]
async fn name_match_suffices_with_different_phone() -> Result<(), AppError> {
    let profiles = StubProfiles::with(Some("555-0100"), Some("Jane Doe"));
    let resolver = OwnershipResolver::new(&profiles);

    let decision = resolver
        .resolve_access(&patient(3), &guest("  jane DOE ", "555-0199"))
        .await?;

    assert_eq!(decision, OwnershipDecision::Allow);

    Ok(())
}

/// Tests a guest appointment with neither field matching.
///
/// Expected: DenyNotOwner
#[tokio::test]
async fn denies_when_nothing_matches() -> Result<(), AppError> {
    let profiles = StubProfiles::with(Some("555-0100"), Some("Jane Doe"));
    let resolver = OwnershipResolver::new(&profiles);

    let decision = resolver
        .resolve_access(&patient(3), &guest("John Roe", "555-0199"))
        .await?;

    assert_eq!(decision, OwnershipDecision::DenyNotOwner);

    Ok(())
}

/// Tests that a caller without a phone does not match a guest appointment with a
/// blank-after-normalization phone.
///
/// Expected: DenyNotOwner
#[tokio::test]
async fn empty_values_never_match() -> Result<(), AppError> {
    let profiles = StubProfiles::with(None, Some("Jane Doe"));
    let resolver = OwnershipResolver::new(&profiles);

    let decision = resolver
        .resolve_access(&patient(3), &guest("John Roe", " - "))
        .await?;

    assert_eq!(decision, OwnershipDecision::DenyNotOwner);

    Ok(())
}

/// Tests a caller whose account no longer exists.
///
/// Expected: DenyIdentityUnresolvable
#[tokio::test]
async fn missing_profile_is_unresolvable() -> Result<(), AppError> {
    let profiles = StubProfiles::missing();
    let resolver = OwnershipResolver::new(&profiles);

    let decision = resolver
        .resolve_access(&patient(3), &guest("Jane Doe", "555-0100"))
        .await?;

    assert_eq!(decision, OwnershipDecision::DenyIdentityUnresolvable);

    Ok(())
}

/// Tests that resolution does not depend on contact details carried by the identity.
///
/// Only the stored profile is consulted for guest matching.
///
/// Expected: DenyNotOwner although the identity's own fields match
#[tokio::test]
async fn uses_stored_profile_not_identity_fields() -> Result<(), AppError> {
    let profiles = StubProfiles::with(Some("555-0100"), Some("Jane Doe"));
    let resolver = OwnershipResolver::new(&profiles);
    let identity = Identity {
        phone: Some("555-0199".to_string()),
        name: Some("John Roe".to_string()),
        ..patient(3)
    };

    let decision = resolver
        .resolve_access(&identity, &guest("John Roe", "555-0199"))
        .await?;

    assert_eq!(decision, OwnershipDecision::DenyNotOwner);

    Ok(())
}

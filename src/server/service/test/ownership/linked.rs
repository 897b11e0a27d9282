use super::*;

/// Tests the owner of a linked appointment.
///
/// Expected: Allow without reading the profile store
#[tokio::test]
async fn owner_is_allowed_by_id() -> Result<(), AppError> {
    let profiles = StubProfiles::with(Some("555-0100"), Some("Jane Doe"));
    let resolver = OwnershipResolver::new(&profiles);

    let decision = resolver
        .resolve_access(&patient(7), &linked(7, "Someone Else", "999"))
        .await?;

    assert_eq!(decision, OwnershipDecision::Allow);
    assert_eq!(profiles.reads(), 0);

    Ok(())
}

/// Tests a patient whose contact details match a linked appointment of another account.
///
/// Linkage is authoritative, so matching name and phone do not grant access.
///
/// Expected: DenyNotOwner without reading the profile store
#[tokio::test]
async fn matching_details_do_not_override_linkage() -> Result<(), AppError> {
    let profiles = StubProfiles::with(Some("555-0100"), Some("Jane Doe"));
    let resolver = OwnershipResolver::new(&profiles);

    let decision = resolver
        .resolve_access(&patient(7), &linked(8, "Jane Doe", "555-0100"))
        .await?;

    assert_eq!(decision, OwnershipDecision::DenyNotOwner);
    assert_eq!(profiles.reads(), 0);

    Ok(())
}

/// Tests the admin bypass.
///
/// Expected: Allow for linked and guest appointments, profile store never read
#[tokio::test]
async fn admin_is_always_allowed() -> Result<(), AppError> {
    let profiles = StubProfiles::failing();
    let resolver = OwnershipResolver::new(&profiles);

    assert_eq!(
        resolver.resolve_access(&admin(1), &linked(8, "A", "1")).await?,
        OwnershipDecision::Allow
    );
    assert_eq!(
        resolver.resolve_access(&admin(1), &guest("A", "1")).await?,
        OwnershipDecision::Allow
    );
    assert_eq!(profiles.reads(), 0);

    Ok(())
}

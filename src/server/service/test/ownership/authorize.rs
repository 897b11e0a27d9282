use super::*;
use crate::server::{
    data::user::UserRepository, error::auth::AuthError, service::ownership::AppointmentGuard,
};
use test_utils::{builder::TestBuilder, factory};

fn identity_for(user: &entity::user::Model) -> Identity {
    Identity {
        id: user.id,
        role: if user.role == "admin" {
            Role::Admin
        } else {
            Role::Patient
        },
        phone: user.phone.clone(),
        name: Some(user.name.clone()),
    }
}

/// Tests each action's denial message for a non-owner.
///
/// Expected: Err(AuthError::AccessDenied) with the action's message
#[tokio::test]
async fn denial_messages_per_action() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let users = UserRepository::new(db);
    let guard = AppointmentGuard::new(&users);
    let identity = identity_for(&intruder);
    let booking = AppointmentOwnership {
        linked_patient_id: Some(owner.id),
        patient_name: owner.name.clone(),
        patient_phone: String::new(),
    };

    let view = guard.authorize_view(&identity, &booking).await;
    let update = guard.authorize_update(&identity, &booking).await;
    let delete = guard.authorize_delete(&identity, &booking).await;

    for (result, expected) in [
        (view, "Not authorized to view this appointment"),
        (update, "Not authorized to update this appointment"),
        (delete, "Not authorized to delete this appointment"),
    ] {
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, ref message))) if message == expected
        ));
    }

    Ok(())
}

/// Tests a guest booking matched through the stored profile.
///
/// Expected: Ok(())
#[tokio::test]
async fn allows_guest_booking_matching_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let patient = factory::user::UserFactory::new(db)
        .name("Jane Doe")
        .phone("+20 100-123-4567")
        .build()
        .await?;
    let users = UserRepository::new(db);

    AppointmentGuard::new(&users)
        .authorize_view(
            &identity_for(&patient),
            &guest("Someone", "+20(100)1234567"),
        )
        .await?;

    Ok(())
}

/// Tests a guest booking checked for a caller whose account no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn missing_profile_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let patient = factory::create_user(db).await?;
    let identity = identity_for(&patient);
    let users = UserRepository::new(db);
    users.delete(patient.id).await?;

    let result = AppointmentGuard::new(&users)
        .authorize_delete(&identity, &guest("Anyone", "555-0000"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == patient.id
    ));

    Ok(())
}

/// Tests that admins pass without a stored profile.
///
/// Expected: Ok(())
#[tokio::test]
async fn admin_needs_no_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let identity = identity_for(&admin);
    let users = UserRepository::new(db);
    users.delete(admin.id).await?;

    AppointmentGuard::new(&users)
        .authorize_update(&identity, &guest("Anyone", "555-0000"))
        .await?;

    Ok(())
}

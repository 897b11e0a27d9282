use super::*;

/// Tests a patient's listing.
///
/// Verifies that the listing contains the linked appointment and the guest appointment
/// matching the caller's phone, and nothing else.
///
/// Expected: exactly the two owned appointments
#[tokio::test]
async fn patient_sees_owned_appointments_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let patient = factory::user::UserFactory::new(db)
        .name("Jane Doe")
        .phone("0123456789")
        .build()
        .await?;
    let other = factory::create_user(db).await?;
    let doctor = factory::create_doctor(db).await?;
    let linked = factory::create_linked_appointment(db, doctor.id, patient.id).await?;
    let guest_match = factory::appointment::AppointmentFactory::new(db, doctor.id)
        .patient_phone("(012) 345-6789")
        .build()
        .await?;
    factory::create_linked_appointment(db, doctor.id, other.id).await?;
    factory::create_guest_appointment(db, doctor.id).await?;
    // Linked to someone else, so the matching name does not count.
    factory::appointment::AppointmentFactory::new(db, doctor.id)
        .patient(other.id)
        .patient_name("Jane Doe")
        .build()
        .await?;
    let identity = identity_of(db, patient.id).await?;

    let appointments = AppointmentService::new(db)
        .list(&identity, AppointmentFilter::default())
        .await?;

    let mut ids: Vec<i32> = appointments.iter().map(|d| d.appointment.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![linked.id, guest_match.id]);

    Ok(())
}

/// Tests an admin's listing.
///
/// Expected: every appointment
#[tokio::test]
async fn admin_sees_everything() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let patient = factory::create_user(db).await?;
    let doctor = factory::create_doctor(db).await?;
    factory::create_linked_appointment(db, doctor.id, patient.id).await?;
    factory::create_guest_appointment(db, doctor.id).await?;
    let identity = identity_of(db, admin.id).await?;

    let appointments = AppointmentService::new(db)
        .list(&identity, AppointmentFilter::default())
        .await?;

    assert_eq!(appointments.len(), 2);

    Ok(())
}

/// Tests a listing with only linked appointments after the account was deleted.
///
/// The profile is only needed for guest appointments, so a listing without any does
/// not fail.
///
/// Expected: Ok and empty
#[tokio::test]
async fn empty_listing_needs_no_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let patient = factory::create_user(db).await?;
    let identity = identity_of(db, patient.id).await?;
    UserRepository::new(db).delete(patient.id).await?;

    let appointments = AppointmentService::new(db)
        .list(&identity, AppointmentFilter::default())
        .await?;

    assert!(appointments.is_empty());

    Ok(())
}

/// Tests a listing that includes guest appointments after the account was deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn deleted_account_fails_guest_matching() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let patient = factory::create_user(db).await?;
    let doctor = factory::create_doctor(db).await?;
    factory::create_guest_appointment(db, doctor.id).await?;
    let identity = identity_of(db, patient.id).await?;
    UserRepository::new(db).delete(patient.id).await?;

    let result = AppointmentService::new(db)
        .list(&identity, AppointmentFilter::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}

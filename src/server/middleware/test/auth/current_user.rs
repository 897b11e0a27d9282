use super::*;

/// Tests the optional lookup for an anonymous visitor.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_guest() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = AuthGuard::new(db, session).current_user().await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests the optional lookup after logging out.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_after_logout() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    auth_session.clear().await?;

    assert!(AuthGuard::new(db, session).current_user().await?.is_none());

    Ok(())
}

/// Tests the strict lookup for a session whose account was deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn strict_lookup_fails_for_deleted_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;
    UserRepository::new(db).delete(user.id).await?;

    let result = AuthGuard::new(db, session).current_user().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user.id
    ));

    Ok(())
}

/// Tests the guest-tolerant lookup for a session whose account was deleted.
///
/// Expected: Ok(None) and the stale user id removed from the session
#[tokio::test]
async fn deleted_account_continues_as_guest() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    UserRepository::new(db).delete(user.id).await?;

    let current = AuthGuard::new(db, session).current_user_or_guest().await?;

    assert!(current.is_none());
    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}

/// Tests booking from a session whose account was deleted.
///
/// Expected: Ok with a guest appointment
#[tokio::test]
async fn booking_with_deleted_account_is_guest_booking() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;
    let doctor = factory::create_doctor(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;
    UserRepository::new(db).delete(user.id).await?;

    let patient_id = AuthGuard::new(db, session)
        .current_user_or_guest()
        .await?
        .map(|user| user.id);
    let booking = CreateAppointmentParam::from_dto(
        CreateAppointmentDto {
            doctor_id: doctor.id,
            service_id: None,
            date: NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
            time: "13:00".to_string(),
            appointment_type: None,
            patient_name: "Jane Doe".to_string(),
            patient_phone: "0123456789".to_string(),
            patient_age: None,
            patient_gender: None,
            notes: None,
            emergency_type: None,
            emergency_description: None,
        },
        patient_id,
    )?;
    let details = AppointmentService::new(db).create(booking).await?;

    assert_eq!(details.appointment.patient_id, None);
    assert_eq!(details.appointment.doctor_id, doctor.id);

    Ok(())
}

/// Tests the guest-tolerant lookup with a valid session.
///
/// Expected: Ok(Some(User)) and the session kept
#[tokio::test]
async fn guest_tolerant_lookup_keeps_valid_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let current = AuthGuard::new(db, session).current_user_or_guest().await?;

    assert_eq!(current.map(|u| u.id), Some(user.id));
    assert_eq!(auth_session.get_user_id().await?, Some(user.id));

    Ok(())
}

use super::*;

/// Tests deleting an account with bookings.
///
/// The account's appointments stay and become guest appointments.
///
/// Expected: Ok, the account gone and its appointment unlinked
#[tokio::test]
async fn unlinks_appointments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (patient, _, _, appointment) =
        factory::helpers::create_linked_appointment_with_dependencies(db).await?;
    let admin = factory::create_admin(db).await?;
    let service = UserService::new(db);

    service.delete(patient.id).await?;

    assert!(matches!(service.get(patient.id).await, Err(AppError::NotFound(_))));
    let admin_identity = service.get(admin.id).await?.identity();
    let remaining = AppointmentService::new(db)
        .get(&admin_identity, appointment.id)
        .await?;
    assert_eq!(remaining.appointment.patient_id, None);

    Ok(())
}

/// Tests deleting an account that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_account_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).delete(42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

use super::*;

/// Tests deleting a guest appointment booked under the caller's name.
///
/// Expected: Ok and the appointment gone
#[tokio::test]
async fn guest_owner_can_delete_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let patient = factory::user::UserFactory::new(db)
        .name("Jane Doe")
        .phone("555-0100")
        .build()
        .await?;
    let doctor = factory::create_doctor(db).await?;
    let appointment = factory::appointment::AppointmentFactory::new(db, doctor.id)
        .patient_name(" JANE doe")
        .patient_phone("555-0199")
        .build()
        .await?;
    let identity = identity_of(db, patient.id).await?;
    let service = AppointmentService::new(db);

    service.delete(&identity, appointment.id).await?;

    let result = service.get(&identity, appointment.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a guest appointment that matches neither phone nor name.
///
/// Expected: Err(AuthError::AccessDenied) with the delete message
#[tokio::test]
async fn stranger_cannot_delete_guest_appointment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let patient = factory::user::UserFactory::new(db)
        .name("Jane Doe")
        .phone("555-0100")
        .build()
        .await?;
    let doctor = factory::create_doctor(db).await?;
    let appointment = factory::create_guest_appointment(db, doctor.id).await?;
    let identity = identity_of(db, patient.id).await?;

    let result = AppointmentService::new(db)
        .delete(&identity, appointment.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, ref message)))
            if message == "Not authorized to delete this appointment"
    ));

    Ok(())
}

/// Tests an admin deleting any appointment.
///
/// Expected: Ok
#[tokio::test]
async fn admin_can_delete_any_appointment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, _, appointment) =
        factory::helpers::create_linked_appointment_with_dependencies(db).await?;
    let admin = factory::create_admin(db).await?;
    let identity = identity_of(db, admin.id).await?;

    AppointmentService::new(db)
        .delete(&identity, appointment.id)
        .await?;

    Ok(())
}

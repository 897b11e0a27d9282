use super::*;

/// Tests deleting an account with booked appointments.
///
/// Verifies the appointments survive as guest appointments.
///
/// Expected: Ok(true) and the appointment's patient id cleared
#[tokio::test]
async fn unlinks_appointments_of_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (patient, _, _, appointment) =
        factory::helpers::create_linked_appointment_with_dependencies(db).await?;

    let deleted = UserRepository::new(db).delete(patient.id).await?;

    assert!(deleted);
    let remaining = crate::server::data::appointment::AppointmentRepository::new(db)
        .find_by_id(appointment.id)
        .await?
        .unwrap();
    assert_eq!(remaining.patient_id, None);

    Ok(())
}

/// Tests deleting an account that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UserRepository::new(db).delete(42).await?);

    Ok(())
}

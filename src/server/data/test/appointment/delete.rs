use super::*;

/// Tests deleting an appointment.
///
/// Expected: Ok(true) first, Ok(false) when repeated
#[tokio::test]
async fn deletes_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let doctor = factory::create_doctor(db).await?;
    let appointment = factory::create_guest_appointment(db, doctor.id).await?;
    let repo = AppointmentRepository::new(db);

    assert!(repo.delete(appointment.id).await?);
    assert!(!repo.delete(appointment.id).await?);
    assert!(repo.find_by_id(appointment.id).await?.is_none());

    Ok(())
}

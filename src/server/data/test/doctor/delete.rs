use super::*;
use crate::server::data::appointment::AppointmentRepository;

/// Tests deleting a doctor with appointments.
///
/// Expected: Ok(true) and the doctor's appointments removed
#[tokio::test]
async fn cascades_to_appointments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let doctor = factory::create_doctor(db).await?;
    let other_doctor = factory::create_doctor(db).await?;
    let appointment = factory::create_guest_appointment(db, doctor.id).await?;
    let kept = factory::create_guest_appointment(db, other_doctor.id).await?;

    assert!(DoctorRepository::new(db).delete(doctor.id).await?);

    let repo = AppointmentRepository::new(db);
    assert!(repo.find_by_id(appointment.id).await?.is_none());
    assert!(repo.find_by_id(kept.id).await?.is_some());

    Ok(())
}

/// Tests deleting a doctor that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_doctor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!DoctorRepository::new(db).delete(3).await?);

    Ok(())
}

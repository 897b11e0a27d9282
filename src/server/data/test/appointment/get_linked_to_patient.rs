use super::*;

/// Tests listing an account's linked appointments.
///
/// Verifies that guest appointments with the account's name are not included and
/// the newest appointment comes first.
///
/// Expected: the two linked appointments, newest first
#[tokio::test]
async fn returns_linked_appointments_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let patient = factory::create_user(db).await?;
    let doctor = factory::create_doctor(db).await?;
    let older = factory::appointment::AppointmentFactory::new(db, doctor.id)
        .patient(patient.id)
        .date(date(2))
        .build()
        .await?;
    let newer = factory::appointment::AppointmentFactory::new(db, doctor.id)
        .patient(patient.id)
        .date(date(20))
        .build()
        .await?;
    factory::appointment::AppointmentFactory::new(db, doctor.id)
        .patient_name(patient.name.clone())
        .build()
        .await?;

    let appointments = AppointmentRepository::new(db)
        .get_linked_to_patient(patient.id)
        .await?;

    let ids: Vec<i32> = appointments.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

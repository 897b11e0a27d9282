use super::*;

/// Tests listing order.
///
/// Expected: ascending by date, then by time
#[tokio::test]
async fn orders_by_date_then_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let doctor = factory::create_doctor(db).await?;
    let late = factory::appointment::AppointmentFactory::new(db, doctor.id)
        .date(date(10))
        .time("15:00")
        .build()
        .await?;
    let later_day = factory::appointment::AppointmentFactory::new(db, doctor.id)
        .date(date(11))
        .time("09:00")
        .build()
        .await?;
    let early = factory::appointment::AppointmentFactory::new(db, doctor.id)
        .date(date(10))
        .time("12:00")
        .build()
        .await?;

    let appointments = AppointmentRepository::new(db)
        .get_all(AppointmentFilter::default())
        .await?;

    let ids: Vec<i32> = appointments.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![early.id, late.id, later_day.id]);

    Ok(())
}

/// Tests combining status, type and doctor filters.
///
/// Expected: only the confirmed emergency with the first doctor
#[tokio::test]
async fn applies_filters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let doctor = factory::create_doctor(db).await?;
    let other_doctor = factory::create_doctor(db).await?;
    let expected = factory::appointment::AppointmentFactory::new(db, doctor.id)
        .status("confirmed")
        .emergency()
        .build()
        .await?;
    factory::appointment::AppointmentFactory::new(db, doctor.id)
        .status("confirmed")
        .build()
        .await?;
    factory::appointment::AppointmentFactory::new(db, doctor.id)
        .emergency()
        .build()
        .await?;
    factory::appointment::AppointmentFactory::new(db, other_doctor.id)
        .status("confirmed")
        .emergency()
        .build()
        .await?;

    let appointments = AppointmentRepository::new(db)
        .get_all(AppointmentFilter {
            status: Some(AppointmentStatus::Confirmed),
            appointment_type: Some(AppointmentType::Emergency),
            doctor_id: Some(doctor.id),
            patient_id: None,
        })
        .await?;

    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].id, expected.id);

    Ok(())
}

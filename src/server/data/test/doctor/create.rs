use super::*;

/// Tests inserting a doctor with availability slots.
///
/// Verifies the slots survive the JSON column round trip and new doctors are active.
///
/// Expected: Ok with identical slots and is_active = true
#[tokio::test]
async fn creates_active_doctor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = DoctorRepository::new(db)
        .create(CreateDoctorParam {
            name: "Dr. Sarah Hany".to_string(),
            specialty: "Cosmetic Dentistry".to_string(),
            image: String::new(),
            available_times: vec!["12:00".to_string(), "14:00".to_string()],
            bio: None,
        })
        .await?;

    assert!(doctor.is_active);
    assert_eq!(doctor.available_times, vec!["12:00", "14:00"]);

    let stored = DoctorRepository::new(db).find_by_id(doctor.id).await?.unwrap();
    assert_eq!(stored.available_times, doctor.available_times);
    assert_eq!(stored.specialty, "Cosmetic Dentistry");

    Ok(())
}

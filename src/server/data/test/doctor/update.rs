use super::*;

/// Tests a partial doctor update.
///
/// Expected: new slots and inactive flag, name unchanged
#[tokio::test]
async fn updates_supplied_fields_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let doctor = factory::create_doctor(db).await?;

    let updated = DoctorRepository::new(db)
        .update(UpdateDoctorParam {
            id: doctor.id,
            available_times: Some(vec!["09:00".to_string()]),
            is_active: Some(false),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, doctor.name);
    assert_eq!(updated.available_times, vec!["09:00"]);
    assert!(!updated.is_active);

    Ok(())
}

/// Tests updating a doctor that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_doctor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = DoctorRepository::new(db)
        .update(UpdateDoctorParam {
            id: 5,
            bio: Some("Bio".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

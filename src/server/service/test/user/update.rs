use super::*;

/// Tests updating a profile's phone number.
///
/// Expected: Ok with the new phone and other fields unchanged
#[tokio::test]
async fn updates_phone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::create_user(db).await?;

    let user = UserService::new(db)
        .update(UpdateUserParam {
            id: created.id,
            phone: Some("0100 200 300".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(user.phone.as_deref(), Some("0100 200 300"));
    assert_eq!(user.name, created.name);

    Ok(())
}

/// Tests updating an account that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_account_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .update(UpdateUserParam {
            id: 42,
            name: Some("Nobody".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

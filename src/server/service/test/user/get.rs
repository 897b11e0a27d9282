use super::*;

/// Tests fetching an existing account.
///
/// Expected: Ok with the account
#[tokio::test]
async fn gets_existing_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::create_user(db).await?;

    let user = UserService::new(db).get(created.id).await?;

    assert_eq!(user.email, created.email);

    Ok(())
}

/// Tests fetching an account that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_account_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).get(42).await;

    assert!(matches!(result, Err(AppError::NotFound(ref m)) if m == "User not found"));

    Ok(())
}

/// Tests listing all accounts.
///
/// Expected: both accounts returned
#[tokio::test]
async fn lists_all_accounts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_user(db).await?;
    factory::create_admin(db).await?;

    let users = UserService::new(db).get_all().await?;

    assert_eq!(users.len(), 2);

    Ok(())
}

use super::*;

/// Tests detecting an admin account.
///
/// Expected: false with only patients, true once an admin exists
#[tokio::test]
async fn detects_admin_accounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    assert!(!repo.admin_exists().await?);

    factory::create_user(db).await?;
    assert!(!repo.admin_exists().await?);

    factory::create_admin(db).await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}

use super::*;

/// Tests inserting a new account.
///
/// Expected: Ok with the stored fields and matching timestamps
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(patient_param("jane@example.com"))
        .await?;

    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.role, Role::Patient);
    assert_eq!(user.phone.as_deref(), Some("555-0100"));
    assert_eq!(user.created_at, user.updated_at);

    Ok(())
}

/// Tests inserting a second account with the same e-mail.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    repo.create(patient_param("jane@example.com")).await?;
    let result = repo.create(patient_param("jane@example.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

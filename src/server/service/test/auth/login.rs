use super::*;

/// Tests logging in with the registered credentials.
///
/// Expected: Ok with the registered account
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin_codes = AdminCodeService::new();
    let service = AuthService::new(db, &admin_codes);
    let registered = service.register(registration("jane@example.com")).await?;

    let user = service
        .login(LoginDto {
            email: " Jane@Example.com ".to_string(),
            password: "secret123".to_string(),
        })
        .await?;

    assert_eq!(user.id, registered.id);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin_codes = AdminCodeService::new();
    let service = AuthService::new(db, &admin_codes);
    service.register(registration("jane@example.com")).await?;

    let result = service
        .login(LoginDto {
            email: "jane@example.com".to_string(),
            password: "wrong-password".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an unknown e-mail address.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin_codes = AdminCodeService::new();

    let result = AuthService::new(db, &admin_codes)
        .login(LoginDto {
            email: "nobody@example.com".to_string(),
            password: "secret123".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in to a factory account whose stored hash is not a valid PHC string.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn unparsable_hash_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let admin_codes = AdminCodeService::new();

    let result = AuthService::new(db, &admin_codes)
        .login(LoginDto {
            email: user.email,
            password: "anything".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

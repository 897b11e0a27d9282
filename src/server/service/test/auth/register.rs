use super::*;

/// Tests registering without an admin code.
///
/// Expected: Ok with a patient account and a hashed password
#[tokio::test]
async fn registers_patient() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin_codes = AdminCodeService::new();

    let user = AuthService::new(db, &admin_codes)
        .register(registration("Jane@Example.com"))
        .await?;

    assert_eq!(user.role, Role::Patient);
    assert_eq!(user.email, "jane@example.com");
    assert_ne!(user.password_hash, "secret123");

    Ok(())
}

/// Tests registering with the active admin code.
///
/// Expected: Ok with an admin account and the code consumed
#[tokio::test]
async fn admin_code_grants_admin_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin_codes = AdminCodeService::new();
    let code = admin_codes.generate().await;

    let user = AuthService::new(db, &admin_codes)
        .register(RegisterDto {
            admin_code: Some(code),
            ..registration("admin@example.com")
        })
        .await?;

    assert_eq!(user.role, Role::Admin);
    assert!(!admin_codes.has_valid_code().await);

    Ok(())
}

/// Tests registering with a wrong admin code.
///
/// Expected: Err(AuthError::InvalidAdminCode) and no account created
#[tokio::test]
async fn rejects_invalid_admin_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin_codes = AdminCodeService::new();
    admin_codes.generate().await;
    let service = AuthService::new(db, &admin_codes);

    let result = service
        .register(RegisterDto {
            admin_code: Some("not-the-code".to_string()),
            ..registration("admin@example.com")
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidAdminCode))
    ));
    assert!(admin_codes.has_valid_code().await);
    let login = service
        .login(LoginDto {
            email: "admin@example.com".to_string(),
            password: "secret123".to_string(),
        })
        .await;
    assert!(matches!(
        login,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that a blank admin code is treated as no code.
///
/// Expected: Ok with a patient account
#[tokio::test]
async fn blank_admin_code_is_ignored() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin_codes = AdminCodeService::new();

    let user = AuthService::new(db, &admin_codes)
        .register(RegisterDto {
            admin_code: Some("   ".to_string()),
            ..registration("jane@example.com")
        })
        .await?;

    assert_eq!(user.role, Role::Patient);

    Ok(())
}

/// Tests registering an e-mail address that is already taken.
///
/// The admin code must survive a request that fails for another reason.
///
/// Expected: Err(AppError::Conflict) and the admin code still active
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .email("jane@example.com")
        .build()
        .await?;
    let admin_codes = AdminCodeService::new();
    let code = admin_codes.generate().await;

    let result = AuthService::new(db, &admin_codes)
        .register(RegisterDto {
            admin_code: Some(code),
            ..registration("JANE@example.com")
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(admin_codes.has_valid_code().await);

    Ok(())
}

/// Tests registering with a short password.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_short_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin_codes = AdminCodeService::new();

    let result = AuthService::new(db, &admin_codes)
        .register(RegisterDto {
            password: "123".to_string(),
            ..registration("jane@example.com")
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

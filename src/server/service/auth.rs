//! Account registration and password login.

use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{
        data::user::{UserRepository, DUPLICATE_EMAIL},
        error::{auth::AuthError, AppError},
        model::user::{NewAccount, Role, User},
        service::admin::code::AdminCodeService,
        util::password::{hash_password, verify_password},
    },
};

/// Service for self registration and credential checks.
///
/// Session handling stays in the controller; this service only decides which account,
/// if any, the request authenticates as.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    admin_codes: &'a AdminCodeService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `admin_codes` - Shared one-time admin code store
    pub fn new(db: &'a DatabaseConnection, admin_codes: &'a AdminCodeService) -> Self {
        Self { db, admin_codes }
    }

    /// Registers a new account.
    ///
    /// Accounts are patients unless a valid admin code is supplied. The code is only
    /// consumed once the rest of the request has been validated and the e-mail address
    /// is known to be free.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Invalid fields
    /// - `Err(AppError::Conflict)` - The e-mail address is already registered
    /// - `Err(AuthError::InvalidAdminCode)` - An admin code was supplied but did not match
    pub async fn register(&self, dto: RegisterDto) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let mut account = NewAccount::validate(
            &dto.name,
            &dto.email,
            dto.password,
            Role::Patient,
            dto.phone,
            dto.age,
            dto.gender.as_deref(),
        )?;

        if user_repo.find_by_email(&account.email).await?.is_some() {
            return Err(AppError::Conflict(DUPLICATE_EMAIL.to_string()));
        }

        let admin_code = dto
            .admin_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty());

        if let Some(code) = admin_code {
            if !self.admin_codes.validate_and_consume(code).await {
                return Err(AuthError::InvalidAdminCode.into());
            }
            account.role = Role::Admin;
        }

        let password_hash = hash_password(&account.password)?;
        let user = user_repo.create(account.into_param(password_hash)).await?;

        tracing::info!(user_id = user.id, admin = user.is_admin(), "Account registered");

        Ok(user)
    }

    /// Checks e-mail and password.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown e-mail or wrong password
    pub async fn login(&self, dto: LoginDto) -> Result<User, AppError> {
        let email = dto.email.trim().to_lowercase();

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&dto.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

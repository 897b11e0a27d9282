//! User service for business logic.
//!
//! This module provides the `UserService` for account management by admins and for
//! patients viewing or editing their own profile. It works with domain models rather
//! than DTOs; access checks happen in the controller before any of these run.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{NewAccount, UpdateUserParam, User},
    util::password::hash_password,
};

const USER_NOT_FOUND: &str = "User not found";

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account with any role.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Conflict)` - The e-mail address is already registered
    pub async fn create(&self, account: NewAccount) -> Result<User, AppError> {
        let password_hash = hash_password(&account.password)?;

        let user = UserRepository::new(self.db)
            .create(account.into_param(password_hash))
            .await?;

        tracing::info!(user_id = user.id, role = ?user.role, "Account created by admin");

        Ok(user)
    }

    /// Retrieves all accounts ordered by name.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db).get_all().await
    }

    /// Retrieves a single account.
    ///
    /// # Returns
    /// - `Ok(User)` - The account
    /// - `Err(AppError::NotFound)` - No account with that id
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Applies a partial update to an account.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated account
    /// - `Err(AppError::NotFound)` - No account with that id
    /// - `Err(AppError::Conflict)` - The new e-mail belongs to another account
    pub async fn update(&self, param: UpdateUserParam) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Deletes an account. Appointments it booked become guest appointments.
    ///
    /// # Returns
    /// - `Ok(())` - The account was deleted
    /// - `Err(AppError::NotFound)` - No account with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        tracing::info!(user_id = id, "Account deleted");

        Ok(())
    }
}

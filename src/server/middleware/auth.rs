use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    /// The caller must have the admin role.
    Admin,
    /// The caller must be the given account or an admin.
    SelfOrAdmin(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged in user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged in user
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session's account no longer exists
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user) = self.current_user().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Admin access required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::SelfOrAdmin(account_id) => {
                    if user.id != *account_id && !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Not authorized to access this account".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Returns the logged in user, if any, for endpoints open to guests.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - A user is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AuthError::UserNotInDatabase)` - The session's account no longer exists
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(Some(user))
    }

    /// Like [`Self::current_user`], but treats a session whose account was deleted as an
    /// anonymous visitor and clears that session.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - A user is logged in
    /// - `Ok(None)` - No user in session, or the session's account no longer exists
    pub async fn current_user_or_guest(&self) -> Result<Option<User>, AppError> {
        match self.current_user().await {
            Err(AppError::AuthErr(AuthError::UserNotInDatabase(user_id))) => {
                tracing::debug!(user_id, "Session account no longer exists, continuing as guest");
                AuthSession::new(self.session).clear().await?;
                Ok(None)
            }
            result => result,
        }
    }
}

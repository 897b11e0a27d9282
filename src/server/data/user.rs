//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing clinic accounts. It handles
//! account creation, lookups by id and e-mail, partial updates and deletion, converting
//! entity models into domain models at the infrastructure boundary. It is also the
//! profile store consulted when matching guest appointments.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::conflict_on_unique,
    error::AppError,
    model::{
        auth::Profile,
        user::{CreateUserParam, Role, UpdateUserParam, User},
        StoredEnum,
    },
    service::ownership::ProfileLookup,
};

/// Message returned when an e-mail address is already registered.
pub const DUPLICATE_EMAIL: &str = "User with this email already exists";

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Arguments
    /// - `param` - Validated account fields with the hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - The e-mail address is already registered
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            phone: ActiveValue::Set(param.phone),
            age: ActiveValue::Set(param.age),
            gender: ActiveValue::Set(param.gender.map(|g| g.as_str().to_string())),
            medical_history: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|e| conflict_on_unique(e, DUPLICATE_EMAIL))?;

        User::from_entity(entity)
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error or malformed stored row
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds a user by (already normalized) e-mail address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Gets all users ordered alphabetically by name.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Applies a partial update to an account.
    ///
    /// Only fields set on `param` are written; `updated_at` is always refreshed.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::Conflict)` - The new e-mail belongs to another account
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateUserParam) -> Result<Option<User>, AppError> {
        let Some(entity) = entity::prelude::User::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(role) = param.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(age) = param.age {
            active.age = ActiveValue::Set(Some(age));
        }
        if let Some(gender) = param.gender {
            active.gender = ActiveValue::Set(Some(gender.as_str().to_string()));
        }
        if let Some(medical_history) = param.medical_history {
            active.medical_history = ActiveValue::Set(Some(medical_history));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active
            .update(self.db)
            .await
            .map_err(|e| conflict_on_unique(e, DUPLICATE_EMAIL))?;

        Ok(Some(User::from_entity(entity)?))
    }

    /// Deletes an account. Its appointments are kept as guest appointments.
    ///
    /// # Returns
    /// - `Ok(true)` - The account was deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks if any admin account exists.
    ///
    /// Used at startup to decide whether a one-time admin code is needed.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin exists
    /// - `Ok(false)` - No admin exists
    /// - `Err(AppError::DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}

impl ProfileLookup for UserRepository<'_> {
    async fn lookup_profile(&self, user_id: i32) -> Result<Option<Profile>, AppError> {
        Ok(self.find_by_id(user_id).await?.map(Profile::from))
    }
}

//! User domain models and parameters.
//!
//! Provides domain models for clinic accounts (patients and admins) along with the
//! parameter types used to create and update them. Password hashes never leave this
//! layer: `UserDto` is built without them.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        error::AppError,
        model::{auth::Identity, optional_from_stored, parse_optional, StoredEnum},
        util::parse::require_non_blank,
    },
};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Patient,
    Admin,
}

impl StoredEnum for Role {
    const FIELD: &'static str = "role";
    const VARIANTS: &'static [Self] = &[Role::Patient, Role::Admin];

    fn as_str(self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl StoredEnum for Gender {
    const FIELD: &'static str = "gender";
    const VARIANTS: &'static [Self] = &[Gender::Male, Gender::Female, Gender::Other];

    fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Clinic account with contact details and role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub medical_history: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - Stored role or gender is not
    ///   a known value
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role: Role::from_stored(entity.role)?,
            phone: entity.phone,
            age: entity.age,
            gender: optional_from_stored(entity.gender)?,
            medical_history: entity.medical_history,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.as_str().to_string(),
            phone: self.phone,
            age: self.age,
            gender: self.gender.map(|g| g.as_str().to_string()),
            medical_history: self.medical_history,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Builds the request identity for this account.
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            role: self.role,
            phone: self.phone.clone(),
            name: Some(self.name.clone()),
        }
    }
}

/// Parameters for inserting a new account.
///
/// The password is already hashed when this reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
}

/// Validated account fields before the password is hashed.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
}

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

impl NewAccount {
    /// Validates the fields shared by self registration and admin account creation.
    ///
    /// E-mail addresses are trimmed and lowercased so that uniqueness is case
    /// insensitive.
    ///
    /// # Returns
    /// - `Ok(NewAccount)` - Validated fields
    /// - `Err(AppError::BadRequest)` - Blank name, malformed e-mail, short password,
    ///   negative age or unknown gender
    pub fn validate(
        name: &str,
        email: &str,
        password: String,
        role: Role,
        phone: Option<String>,
        age: Option<i32>,
        gender: Option<&str>,
    ) -> Result<Self, AppError> {
        let name = require_non_blank("Name", name)?;
        let email = normalize_email(email)?;

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        validate_age(age)?;

        Ok(Self {
            name,
            email,
            password,
            role,
            phone: phone.filter(|p| !p.trim().is_empty()),
            age,
            gender: parse_optional(gender)?,
        })
    }

    /// Validates an admin's account creation request.
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let role = match dto.role.as_deref() {
            Some(role) => Role::parse(role)?,
            None => Role::Patient,
        };

        Self::validate(
            &dto.name,
            &dto.email,
            dto.password,
            role,
            dto.phone,
            dto.age,
            dto.gender.as_deref(),
        )
    }

    /// Pairs the validated fields with the hashed password.
    pub fn into_param(self, password_hash: String) -> CreateUserParam {
        CreateUserParam {
            name: self.name,
            email: self.email,
            password_hash,
            role: self.role,
            phone: self.phone,
            age: self.age,
            gender: self.gender,
        }
    }
}

/// Partial account update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParam {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub medical_history: Option<String>,
}

impl UpdateUserParam {
    /// Converts an update request into parameters.
    ///
    /// A requested role change is only kept when `allow_role_change` is set, which the
    /// controller does for admins. Patients sending a role have it silently ignored.
    ///
    /// # Arguments
    /// - `id` - Account being updated
    /// - `dto` - The request payload
    /// - `allow_role_change` - Whether the caller may change roles
    ///
    /// # Returns
    /// - `Ok(UpdateUserParam)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - A supplied field is invalid
    pub fn from_dto(
        id: i32,
        dto: UpdateUserDto,
        allow_role_change: bool,
    ) -> Result<Self, AppError> {
        let name = dto
            .name
            .map(|name| require_non_blank("Name", &name))
            .transpose()?;
        let email = dto.email.map(|email| normalize_email(&email)).transpose()?;
        let role = if allow_role_change {
            parse_optional(dto.role.as_deref())?
        } else {
            None
        };
        validate_age(dto.age)?;

        Ok(Self {
            id,
            name,
            email,
            role,
            phone: dto.phone,
            age: dto.age,
            gender: parse_optional(dto.gender.as_deref())?,
            medical_history: dto.medical_history,
        })
    }
}

fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };

    if !valid {
        return Err(AppError::BadRequest(
            "Please provide a valid email".to_string(),
        ));
    }

    Ok(email)
}

fn validate_age(age: Option<i32>) -> Result<(), AppError> {
    match age {
        Some(age) if !(0..=150).contains(&age) => Err(AppError::BadRequest(
            "Age must be between 0 and 150".to_string(),
        )),
        _ => Ok(()),
    }
}

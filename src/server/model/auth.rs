//! Request identity and profile types used by access control.

use crate::server::model::user::{Role, User};

/// The authenticated caller of a request.
///
/// Built once per request from the session credential and passed explicitly to every
/// access decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: i32,
    pub role: Role,
    pub phone: Option<String>,
    pub name: Option<String>,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Contact details of an account as held by the profile store.
///
/// Used to match guest appointments, which only carry the name and phone number entered
/// at booking time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub phone: Option<String>,
    pub name: Option<String>,
}

impl From<User> for Profile {
    fn from(user: User) -> Self {
        Self {
            phone: user.phone,
            name: Some(user.name),
        }
    }
}
